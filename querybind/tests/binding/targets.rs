use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use querybind::{BindError, Reflect, Values, unmarshal};
use querybind_testhelpers::IPanic;

#[derive(Debug, Default, PartialEq, Reflect)]
struct Account {
    #[tag(url = "user")]
    user: String,
    #[tag(url = "age")]
    age: u8,
    #[tag(url = "nested")]
    nested: Profile,
}

#[derive(Debug, Default, PartialEq, Reflect)]
struct Profile {
    #[tag(url = "bio")]
    bio: String,
}

#[derive(Debug, Default, PartialEq, Reflect)]
enum Mode {
    #[default]
    Fast,
    Slow,
}

fn query() -> Values {
    [("user", "ann"), ("age", "31"), ("nested", "x"), ("bio", "hi")]
        .into_iter()
        .collect()
}

#[querybind_testhelpers::test]
fn boxed_struct_binds_through_the_box() -> Result<(), IPanic> {
    let mut account = Box::new(Account::default());
    let keys = unmarshal(&query(), &mut account, "url")?;
    assert_eq!(keys, ["user", "age"]);
    assert_eq!(account.user, "ann");
    assert_eq!(account.age, 31);
    Ok(())
}

#[querybind_testhelpers::test]
fn nested_structs_are_not_descended_into() -> Result<(), IPanic> {
    let mut account = Account::default();
    unmarshal(&query(), &mut account, "url")?;
    assert_eq!(account.nested, Profile::default());
    Ok(())
}

#[querybind_testhelpers::test]
fn double_box_is_rejected() {
    let mut account = Box::new(Box::new(Account::default()));
    let err = unmarshal(&query(), &mut account, "url").unwrap_err();
    assert_eq!(
        err,
        BindError::NotAStruct {
            type_identifier: "Box"
        }
    );
    assert_eq!(**account, Account::default());
}

#[querybind_testhelpers::test]
fn enums_are_rejected() {
    let mut mode = Mode::Slow;
    let err = unmarshal(&query(), &mut mode, "url").unwrap_err();
    insta::assert_snapshot!(err, @"cannot bind query values into `Mode`: not a struct");
    assert_eq!(mode, Mode::Slow);
}

#[querybind_testhelpers::test]
fn boxed_map_is_rejected() {
    let mut map: Box<HashMap<String, String>> = Box::default();
    assert_eq!(
        unmarshal(&query(), &mut map, "url"),
        Err(BindError::NotAStruct {
            type_identifier: "HashMap"
        })
    );
}

#[derive(Debug, Default, Reflect)]
struct Pair(#[tag(url = "user")] String, #[tag(url = "age")] u8);

#[querybind_testhelpers::test]
fn tuple_structs_bind_by_position() -> Result<(), IPanic> {
    let mut pair = Pair::default();
    let keys = unmarshal(&query(), &mut pair, "url")?;
    assert_eq!(keys, ["user", "age"]);
    assert_eq!(pair.0, "ann");
    assert_eq!(pair.1, 31);
    Ok(())
}

#[derive(Debug, Default, Reflect)]
struct Marker;

#[querybind_testhelpers::test]
fn unit_structs_bind_nothing() -> Result<(), IPanic> {
    assert!(unmarshal(&query(), &mut Marker, "url")?.is_empty());
    Ok(())
}

#[querybind_testhelpers::test]
fn any_multi_map_is_a_source() -> Result<(), IPanic> {
    let pairs = [("user", vec!["bob"]), ("age", vec!["40", "41"])];
    let owned = || {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>()))
    };

    let hash: HashMap<String, Vec<String>> = owned().collect();
    let btree: BTreeMap<String, Vec<String>> = owned().collect();
    let index: IndexMap<String, Vec<String>> = owned().collect();

    for keys in [
        unmarshal(&hash, &mut Account::default(), "url")?,
        unmarshal(&btree, &mut Account::default(), "url")?,
        unmarshal(&index, &mut Account::default(), "url")?,
        unmarshal(&&hash, &mut Account::default(), "url")?,
    ] {
        assert_eq!(keys, ["user", "age"]);
    }

    let mut account = Account::default();
    unmarshal(&index, &mut account, "url")?;
    assert_eq!(account.age, 40);
    Ok(())
}
