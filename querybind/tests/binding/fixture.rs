use std::collections::HashMap;

use querybind::{Reflect, Values, unmarshal};
use querybind_testhelpers::IPanic;

#[derive(Debug, Default, PartialEq, Reflect)]
struct Everything {
    #[tag(url = "str1")]
    str1: String,
    #[tag(url = "-")]
    str_block: String,
    str_no_tag: Option<String>,
    #[tag(url = "str")]
    strings: Vec<String>,
    #[tag(url = "bytes")]
    bytes: Vec<u8>,
    #[tag(url = "int1")]
    int1: i64,
    #[tag(url = "uint16")]
    uint16: u16,
    #[tag(url = "float32")]
    float32: f32,
    #[tag(url = "int")]
    ints: Vec<i64>,
    #[tag(url = "nonint")]
    non_existent_ints: Vec<i64>,
    #[tag(url = "bool1")]
    bool1: bool,
    #[tag(url = "bool")]
    bools: Vec<bool>,
    #[tag(url = "non")]
    non_existent: Vec<String>,
    #[tag(url = "badnum")]
    bad_num: i64,
    #[tag(url = "badnumslice")]
    bad_num_slice: Vec<i64>,
    #[tag(form = "otherval")]
    other_tag: String,
    #[tag(form = "otherval,omitempty")]
    omit_empty: String,
    #[tag(url = "othertags", json = "othertags")]
    other_tags: String,
    #[tag(url = "notsupported", json = "notsupported")]
    not_supported: HashMap<String, bool>,
}

fn query() -> Values {
    let mut q = Values::new();
    q.add("str1", "string1");
    q.add("str", "str1");
    q.add("str", "str2");
    q.add("str", "str3");
    q.add("bytes", "manybytes");
    q.add("int1", "123");
    q.add("uint16", "123");
    q.add("float32", "123.456");
    q.add("int", "456");
    q.add("int", "789");
    q.add("bool1", "true");
    q.add("bool", "true");
    q.add("bool", "false");
    q.add("bool", "f");
    q.add("bool", "t");
    q.add("badnum", "abc");
    q.add("badnumslice", "abc");
    q.add("badnumslice", "def");
    q.add("notsupported", "def");
    q
}

#[querybind_testhelpers::test]
fn map_target_is_rejected() {
    let mut target: HashMap<String, String> = HashMap::new();
    let err = unmarshal(&query(), &mut target, "url").unwrap_err();
    insta::assert_snapshot!(err, @"cannot bind query values into `HashMap`: not a struct");
    assert!(target.is_empty());
}

#[querybind_testhelpers::test]
fn binds_every_supported_field() -> Result<(), IPanic> {
    let mut got = Everything::default();
    let keys = unmarshal(&query(), &mut got, "url")?;

    let expected = Everything {
        str1: "string1".into(),
        strings: vec!["str1".into(), "str2".into(), "str3".into()],
        bytes: b"manybytes".to_vec(),
        int1: 123,
        uint16: 123,
        float32: 123.456,
        ints: vec![456, 789],
        bool1: true,
        bools: vec![true, false, false, true],
        bad_num: 0,
        bad_num_slice: vec![0, 0],
        ..Everything::default()
    };
    assert_eq!(got, expected);

    insta::assert_debug_snapshot!(keys, @r#"
    [
        "str1",
        "str",
        "bytes",
        "int1",
        "uint16",
        "float32",
        "int",
        "bool1",
        "bool",
        "badnum",
        "badnumslice",
    ]
    "#);
    Ok(())
}

#[querybind_testhelpers::test]
fn other_namespace_binds_its_own_fields() -> Result<(), IPanic> {
    let mut q = query();
    q.add("otherval", "from-form");
    q.add("othertags", "from-json");

    let mut got = Everything::default();
    let keys = unmarshal(&q, &mut got, "form")?;
    assert_eq!(keys, ["otherval", "otherval"]);
    assert_eq!(got.other_tag, "from-form");
    assert_eq!(got.omit_empty, "from-form");
    assert!(got.str1.is_empty());

    let mut got = Everything::default();
    let keys = unmarshal(&q, &mut got, "json")?;
    assert_eq!(keys, ["othertags"]);
    assert_eq!(got.other_tags, "from-json");
    assert!(got.not_supported.is_empty());
    Ok(())
}
