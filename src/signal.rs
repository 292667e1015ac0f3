use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 第一次 Ctrl-C 只設定旗標，目前的項目完成後才停止
pub fn setup_shutdown_signal() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n收到中斷信號，完成目前項目後停止...");
    })?;

    Ok(shutdown_signal)
}
