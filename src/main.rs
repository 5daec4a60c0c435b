use tracing::error;

use showcase_curator::app;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| {
                panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(|s| s.as_str())
            })
            .unwrap_or("unknown panic payload");

        if let Some(location) = panic_info.location() {
            error!(
                file = location.file(),
                line = location.line(),
                message,
                "panic occurred"
            );
        } else {
            error!(message, "panic occurred without location information");
        }
        eprintln!("showcase-curator panicked: {message}");
    }));

    if let Err(e) = app::main() {
        let chain = format!("{e:#}");
        error!(error = %chain, "showcase-curator failed");
        eprintln!("Error: {chain}");
        std::process::exit(1);
    }
}
