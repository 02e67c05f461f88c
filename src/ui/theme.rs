use eframe::egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(139, 92, 246);
pub const SECONDARY: Color32 = Color32::from_rgb(217, 70, 239);
pub const ONLINE: Color32 = Color32::from_rgb(34, 197, 94);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(239, 68, 68);
pub const MUTED: Color32 = Color32::from_rgb(55, 55, 70);
pub const CARD: Color32 = Color32::from_rgb(30, 30, 40);
pub const SELECTED: Color32 = Color32::from_rgb(60, 45, 95);
