use gloo::timers::callback::Timeout;

use galleria_core::TimerHost;

/// Browser timeouts; dropping the returned `Timeout` clears it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooTimers;

impl TimerHost for GlooTimers {
    type Handle = Timeout;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
