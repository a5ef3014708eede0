#![no_main]

use libfuzzer_sys::fuzz_target;
use volume_header::{HeaderContext, Renderer};

fuzz_target!(|data: &str| {
    if let Ok(ctx) = serde_json::from_str::<HeaderContext>(data) {
        let _ = Renderer::new().render(&ctx);
    }
});
