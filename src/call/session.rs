use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::common::{CallEvent, CallKind, Contact};

use super::media::{MediaDevices, MediaRequest, MediaStream};
use super::state::CallState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSettings {
    pub ringing_delay: Duration,
    pub tick_interval: Duration,
    pub self_preview: bool,
}

impl Default for CallSettings {
    fn default() -> Self {
        Self {
            ringing_delay: Duration::from_millis(2000),
            tick_interval: Duration::from_secs(1),
            self_preview: true,
        }
    }
}

/// Một cuộc gọi đang hiển thị trên overlay.
///
/// Owns the timer task and the optional preview task. Dropping the session
/// aborts both and releases the preview stream.
pub struct CallSession {
    state: CallState,
    preview: Option<MediaStream>,
    event_receiver: mpsc::Receiver<CallEvent>,
    elapsed_receiver: watch::Receiver<u64>,
    timer_task: JoinHandle<()>,
    media_task: Option<JoinHandle<()>>,
}

impl CallSession {
    pub fn start(
        runtime: &Handle,
        contact: Contact,
        kind: CallKind,
        settings: CallSettings,
        media: Arc<dyn MediaDevices>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel(32);
        let (elapsed_tx, elapsed_rx) = watch::channel(0);
        log::info!("Starting {kind:?} call with {}", contact.name);

        let timer_task = runtime.spawn(run_timers(
            settings.ringing_delay,
            settings.tick_interval,
            event_tx.clone(),
            elapsed_tx,
        ));

        let media_task = (kind.is_video() && settings.self_preview)
            .then(|| runtime.spawn(acquire_preview(media, event_tx)));

        Self {
            state: CallState::new(contact, kind),
            preview: None,
            event_receiver: event_rx,
            elapsed_receiver: elapsed_rx,
            timer_task,
            media_task,
        }
    }

    /// Drains pending timer and media events into the state, then picks up
    /// the latest duration. Works the same after the UI stalls for a while.
    pub fn handle_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                CallEvent::Connected => {
                    if self.state.connect() {
                        log::info!("Call with {} connected", self.state.contact().name);
                    }
                }
                CallEvent::PreviewReady(stream) => {
                    log::info!("Self preview attached: {}", stream.label());
                    self.preview = Some(stream);
                }
            }
        }
        let elapsed = *self.elapsed_receiver.borrow_and_update();
        self.state.sync_elapsed(elapsed);
    }

    pub fn state(&self) -> &CallState {
        &self.state
    }

    pub fn preview(&self) -> Option<&MediaStream> {
        self.preview.as_ref()
    }

    pub fn toggle_mute(&mut self) {
        self.state.toggle_mute();
    }

    pub fn toggle_camera(&mut self) {
        self.state.toggle_camera();
    }

    pub fn toggle_speaker(&mut self) {
        self.state.toggle_speaker();
    }
}

impl Drop for CallSession {
    fn drop(&mut self) {
        self.timer_task.abort();
        if let Some(task) = self.media_task.take() {
            task.abort();
        }
        log::info!(
            "Call with {} ended after {}",
            self.state.contact().name,
            self.state.duration_label()
        );
    }
}

async fn run_timers(
    ringing_delay: Duration,
    tick_interval: Duration,
    events: mpsc::Sender<CallEvent>,
    elapsed: watch::Sender<u64>,
) {
    time::sleep(ringing_delay).await;
    if events.send(CallEvent::Connected).await.is_err() {
        return;
    }
    drop(events);

    // Total is derived from the clock, so late or skipped ticks lose nothing.
    let connected_at = Instant::now();
    let step = tick_interval.as_millis().max(1);
    let mut interval = time::interval_at(connected_at + tick_interval, tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let secs = (connected_at.elapsed().as_millis() / step) as u64;
        if elapsed.send(secs).is_err() {
            break;
        }
    }
}

async fn acquire_preview(media: Arc<dyn MediaDevices>, events: mpsc::Sender<CallEvent>) {
    let result = tokio::task::spawn_blocking(move || media.open(MediaRequest::AUDIO_VIDEO)).await;

    match result {
        Ok(Ok(stream)) => {
            if events.send(CallEvent::PreviewReady(stream)).await.is_err() {
                log::debug!("Call ended before the preview was ready");
            }
        }
        Ok(Err(err)) => log::warn!("Error accessing media devices: {err}"),
        Err(err) => log::warn!("Media acquisition task failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::call::media::MediaError;
    use crate::call::state::CallPhase;

    struct NoDevices;

    impl MediaDevices for NoDevices {
        fn open(&self, _request: MediaRequest) -> Result<MediaStream, MediaError> {
            Err(MediaError::NotFound("video"))
        }
    }

    #[derive(Default)]
    struct CountingDevices {
        opened: AtomicUsize,
    }

    impl MediaDevices for CountingDevices {
        fn open(&self, request: MediaRequest) -> Result<MediaStream, MediaError> {
            assert_eq!(request, MediaRequest::AUDIO_VIDEO);
            self.opened.fetch_add(1, Ordering::SeqCst);
            Ok(MediaStream::new(None, Some("/dev/snd".into())))
        }
    }

    fn start(kind: CallKind, media: Arc<dyn MediaDevices>) -> CallSession {
        CallSession::start(
            &Handle::current(),
            Contact::new("Анна Иванова"),
            kind,
            CallSettings::default(),
            media,
        )
    }

    async fn wait(millis: u64) {
        time::sleep(Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn stays_ringing_until_delay_elapses() {
        let mut session = start(CallKind::Voice, Arc::new(NoDevices));

        wait(1_500).await;
        session.handle_events();
        assert_eq!(session.state().phase(), CallPhase::Ringing);
        assert_eq!(session.state().duration_label(), "0:00");

        wait(600).await;
        session.handle_events();
        assert_eq!(session.state().phase(), CallPhase::Connected);
        assert_eq!(session.state().elapsed_secs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn counts_seconds_after_connect_and_never_reverts() {
        let mut session = start(CallKind::Voice, Arc::new(NoDevices));

        // connect at 2.0s, ticks at 3.0, 4.0, 5.0
        wait(5_500).await;
        session.handle_events();
        assert_eq!(session.state().phase(), CallPhase::Connected);
        assert_eq!(session.state().elapsed_secs(), 3);

        wait(62_000).await;
        session.handle_events();
        assert_eq!(session.state().phase(), CallPhase::Connected);
        assert_eq!(session.state().duration_label(), "1:05");
    }

    #[tokio::test(start_paused = true)]
    async fn counter_catches_up_after_ui_stall() {
        let mut session = start(CallKind::Voice, Arc::new(NoDevices));

        // nobody drains for a minute, like a minimized window
        wait(62_500).await;
        session.handle_events();
        assert_eq!(session.state().elapsed_secs(), 60);
        assert_eq!(session.state().duration_label(), "1:00");

        for _ in 0..50 {
            wait(200).await;
            session.handle_events();
        }
        // connected at 2.0s, now at 72.5s
        assert_eq!(session.state().elapsed_secs(), 70);
        assert_eq!(session.state().duration_label(), "1:10");
    }

    #[tokio::test(start_paused = true)]
    async fn media_failure_is_swallowed() {
        let mut session = start(CallKind::Video, Arc::new(NoDevices));

        wait(2_500).await;
        session.handle_events();
        assert!(session.preview().is_none());
        assert_eq!(session.state().phase(), CallPhase::Connected);
    }

    #[tokio::test(start_paused = true)]
    async fn video_call_attaches_preview_once() {
        let devices = Arc::new(CountingDevices::default());
        let mut session = start(CallKind::Video, devices.clone());

        wait(2_500).await;
        session.handle_events();
        assert!(session.preview().is_some());
        assert_eq!(devices.opened.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn voice_call_skips_media() {
        let devices = Arc::new(CountingDevices::default());
        let mut session = start(CallKind::Voice, devices.clone());

        wait(2_500).await;
        session.handle_events();
        assert!(session.preview().is_none());
        assert_eq!(devices.opened.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn toggles_flip_one_flag_each() {
        let mut session = start(CallKind::Video, Arc::new(NoDevices));
        session.toggle_mute();
        assert!(session.state().muted());
        assert!(!session.state().camera_off());

        session.toggle_camera();
        session.toggle_camera();
        assert!(session.state().muted());
        assert!(!session.state().camera_off());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_timer_task() {
        let session = start(CallKind::Voice, Arc::new(NoDevices));
        let timer = session.timer_task.abort_handle();

        drop(session);
        wait(10).await;
        assert!(timer.is_finished());
    }
}
