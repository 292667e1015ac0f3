use env_logger::Env;

/// 預設只顯示警告；`--verbose` 顯示本 crate 的除錯訊息。`RUST_LOG` 優先
pub fn init(verbose: bool) {
    let default_filter = if verbose { "gif_maker=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
