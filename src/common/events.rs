use crate::call::media::MediaStream;

/// Sự kiện từ task của cuộc gọi gửi lên UI.
#[derive(Debug)]
pub enum CallEvent {
    /// Hết thời gian đổ chuông, cuộc gọi chuyển sang trạng thái đã kết nối.
    Connected,
    PreviewReady(MediaStream),
}
