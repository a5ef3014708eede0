#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use volume_header::{HeaderContext, Renderer, Volume};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    pid: &'a str,
    title: &'a str,
    title_part1: Option<&'a str>,
    title_part2: Option<&'a str>,
    volume: Option<&'a str>,
    date: Vec<&'a str>,
    request_path: &'a str,
    page: bool,
    rdfa: bool,
    keyword: Option<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let vol = Volume {
        pid: input.pid.to_owned(),
        title: input.title.to_owned(),
        title_part1: input.title_part1.map(str::to_owned),
        title_part2: input.title_part2.map(str::to_owned),
        volume: input.volume.map(str::to_owned),
        date: input.date.iter().map(|d| d.to_string()).collect(),
    };
    let mut ctx = HeaderContext::new(vol)
        .with_request_path(input.request_path)
        .with_page(input.page)
        .with_rdfa(input.rdfa);
    if let Some(keyword) = input.keyword {
        ctx = ctx.with_keyword(keyword);
    }

    let html = Renderer::new().render(&ctx).unwrap();
    assert!(html.starts_with("<header") && html.ends_with("</header>"));
    assert!(!html.contains("<script"));
});
