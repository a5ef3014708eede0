use rand::Rng;
use volume_header::{HeaderContext, Volume};

fn word(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range('a'..='z')).collect()
}

/// A random volume with `n` dates, rendered on a page view if `page`.
pub fn random(n: usize, page: bool) -> HeaderContext {
    let mut rng = rand::thread_rng();
    let pid = format!("emory:{}", word(&mut rng, 5));
    let part1 = word(&mut rng, 20);
    let part2 = word(&mut rng, 30);
    let mut vol = Volume::new(pid, format!("{part1}: {part2}"))
        .with_title_parts(part1, Some(part2))
        .with_volume(rng.gen_range(1..10).to_string());
    for _ in 0..n {
        vol = vol.with_date(rng.gen_range(1800..2000).to_string());
    }
    let path = if page {
        format!("/books/{}/pages/", vol.pid)
    } else {
        format!("/books/{}/", vol.pid)
    };
    HeaderContext::new(vol)
        .with_request_path(path)
        .with_page(page)
        .with_rdfa(rng.gen_ratio(1, 2))
}

/// The same context as JSON, the way a view layer would hand it over.
pub fn random_json(n: usize, page: bool) -> String {
    let ctx = random(n, page);
    serde_json::json!({
        "vol": {
            "pid": ctx.vol.pid,
            "title": ctx.vol.title,
            "title_part1": ctx.vol.title_part1,
            "title_part2": ctx.vol.title_part2,
            "volume": ctx.vol.volume,
            "date": ctx.vol.date,
        },
        "request_path": ctx.request_path,
        "page": if ctx.page { serde_json::json!({ "number": 1 }) } else { serde_json::Value::Null },
        "rdfa": ctx.rdfa,
    })
    .to_string()
}
