use querybind::{Binder, Outcome, Reflect, Values, unmarshal};
use querybind_testhelpers::IPanic;

#[derive(Debug, Default, PartialEq, Reflect)]
struct Numbers {
    #[tag(q = "i8")]
    i8: i8,
    #[tag(q = "i16")]
    i16: i16,
    #[tag(q = "u8")]
    u8: u8,
    #[tag(q = "u32")]
    u32: u32,
    #[tag(q = "usize")]
    usize: usize,
    #[tag(q = "i128")]
    i128: i128,
    #[tag(q = "f32")]
    f32: f32,
    #[tag(q = "f64")]
    f64: f64,
}

fn bind_one(key: &str, value: &str) -> Numbers {
    let q: Values = [(key, value)].into_iter().collect();
    let mut n = Numbers::default();
    unmarshal(&q, &mut n, "q").unwrap();
    n
}

#[querybind_testhelpers::test]
fn integers_truncate_to_field_width() {
    assert_eq!(bind_one("i8", "300").i8, 44);
    assert_eq!(bind_one("i8", "-129").i8, 127);
    assert_eq!(bind_one("i16", "65535").i16, -1);
    assert_eq!(bind_one("u8", "256").u8, 0);
    assert_eq!(bind_one("u32", "4294967297").u32, 1);
}

#[querybind_testhelpers::test]
fn unsigned_fields_reject_signs() {
    assert_eq!(bind_one("u8", "-1").u8, 0);
    assert_eq!(bind_one("usize", "+3").usize, 0);
    assert_eq!(bind_one("usize", "3").usize, 3);
}

#[querybind_testhelpers::test]
fn out_of_range_64_bit_text_is_rejected() {
    assert_eq!(bind_one("i8", "9223372036854775808").i8, 0);
    assert_eq!(
        bind_one("i128", "9223372036854775808").i128,
        9_223_372_036_854_775_808
    );
}

#[querybind_testhelpers::test]
fn floats() {
    assert_eq!(bind_one("f64", "-2.5e3").f64, -2500.0);
    assert_eq!(bind_one("f32", "0.1").f32, 0.1_f64 as f32);
    assert!(bind_one("f64", "inf").f64.is_infinite());
    assert_eq!(bind_one("f64", "1,5").f64, 0.0);
}

#[querybind_testhelpers::test]
fn float_overflow_leaves_the_field_and_is_reported() -> Result<(), IPanic> {
    let q: Values = [("f64", "1e400"), ("f32", "-1e400")].into_iter().collect();
    let mut n = Numbers {
        f64: 1.5,
        f32: 2.5,
        ..Numbers::default()
    };
    let report = Binder::new("q").bind_report(&q, &mut n)?;
    assert_eq!(n.f64, 1.5);
    assert_eq!(n.f32, 2.5);
    for key in ["f64", "f32"] {
        assert_eq!(
            report.get(key).map(|f| &f.outcome),
            Some(&Outcome::Malformed { rejected: vec![0] }),
            "{key}"
        );
    }
    Ok(())
}

#[derive(Debug, Default, Reflect)]
struct Flags {
    #[tag(q = "flag")]
    flag: bool,
}

#[querybind_testhelpers::test]
fn boolean_literals() -> Result<(), IPanic> {
    for (raw, expected) in [
        ("1", true),
        ("t", true),
        ("T", true),
        ("TRUE", true),
        ("true", true),
        ("True", true),
        ("0", false),
        ("f", false),
        ("F", false),
        ("FALSE", false),
        ("false", false),
        ("False", false),
    ] {
        let q: Values = [("flag", raw)].into_iter().collect();
        let mut flags = Flags { flag: !expected };
        unmarshal(&q, &mut flags, "q")?;
        assert_eq!(flags.flag, expected, "{raw}");
    }
    Ok(())
}

#[querybind_testhelpers::test]
fn unknown_boolean_is_false_and_reported() -> Result<(), IPanic> {
    let q: Values = [("flag", "yes")].into_iter().collect();
    let mut flags = Flags { flag: true };
    let keys = unmarshal(&q, &mut flags, "q")?;
    assert!(!flags.flag);
    assert_eq!(keys, ["flag"]);
    Ok(())
}

#[derive(Debug, Default, Reflect)]
struct Lists {
    #[tag(q = "n")]
    numbers: Vec<u16>,
    #[tag(q = "s")]
    words: Vec<String>,
    #[tag(q = "n")]
    one: u16,
}

#[querybind_testhelpers::test]
fn one_key_feeds_scalars_and_sequences() -> Result<(), IPanic> {
    let q: Values = [("n", "7"), ("n", "x"), ("n", "9")].into_iter().collect();
    let mut lists = Lists {
        words: vec!["old".into()],
        ..Lists::default()
    };
    let keys = unmarshal(&q, &mut lists, "q")?;
    assert_eq!(lists.numbers, [7, 0, 9]);
    assert_eq!(lists.one, 7);
    assert_eq!(lists.words, ["old"]);
    assert_eq!(keys, ["n", "n"]);
    Ok(())
}

#[cfg(feature = "bytes")]
mod bytes_buffers {
    use bytes::Bytes;
    use querybind::{Reflect, Values, unmarshal};
    use querybind_testhelpers::IPanic;

    #[derive(Debug, Default, Reflect)]
    struct Upload {
        #[tag(q = "body")]
        body: Bytes,
    }

    #[querybind_testhelpers::test]
    fn bytes_take_the_first_value() -> Result<(), IPanic> {
        let q: Values = [("body", "abc"), ("body", "def")].into_iter().collect();
        let mut upload = Upload::default();
        let keys = unmarshal(&q, &mut upload, "q")?;
        assert_eq!(upload.body, "abc");
        assert_eq!(keys, ["body"]);
        Ok(())
    }
}
