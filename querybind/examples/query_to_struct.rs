//! Binds a decoded query string onto a struct and prints what happened.
//!
//! Run with `QUERYBIND_LOG=trace cargo run --example query_to_struct` to see
//! every skipped field.

use querybind::{Binder, Outcome, Reflect, Values};

#[derive(Debug, Default, Reflect)]
struct Search {
    #[tag(url = "q")]
    query: String,
    #[tag(url = "page,omitempty")]
    page: u32,
    #[tag(url = "lang")]
    languages: Vec<String>,
    #[tag(url = "stars")]
    min_stars: Vec<u32>,
    #[tag(url = "archived")]
    archived: bool,
    #[tag(url = "-")]
    session: String,
}

fn main() -> Result<(), querybind::BindError> {
    querybind_testhelpers::setup();

    let raw = "q=static+reflection&page=2&lang=rust&lang=go%2B%2B&stars=100&stars=lots&archived=no&session=abc";
    let q: Values = form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut search = Search::default();
    let report = Binder::new("url").bind_report(&q, &mut search)?;

    println!("{search:#?}");
    for field in report.fields() {
        match &field.outcome {
            Outcome::Converted => println!("{:>10} <- {}", field.field, field.key),
            Outcome::Malformed { rejected } => println!(
                "{:>10} <- {} (rejected values at {rejected:?})",
                field.field, field.key
            ),
        }
    }
    Ok(())
}
