use std::collections::{BTreeMap, HashMap};

use structenv::{Kind, Record};

fn source<const N: usize>(vars: [(&str, &str); N]) -> HashMap<String, String> {
    vars.into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

#[test]
fn nested_records_add_a_segment() {
    // Simulate composing config from different modules
    use foo::{bar::KafkaConfig, baz::AppConfig};

    mod foo {
        pub mod bar {
            use structenv::Record;

            #[derive(Record, Debug, Default, PartialEq)]
            pub struct KafkaConfig {
                pub brokers: String,
            }
        }

        pub mod baz {
            use structenv::Record;

            #[derive(Record, Debug, Default, PartialEq)]
            pub struct AppConfig {
                pub database_url: String,
                pub kafka: super::bar::KafkaConfig,
            }
        }
    }

    let expected = AppConfig {
        database_url: "postgres://postgres@postgres/postgres".into(),
        kafka: KafkaConfig {
            brokers: "kafka:29092".into(),
        },
    };

    let mut actual = AppConfig::default();
    temp_env::with_vars(
        [
            (
                "APPCONFIG_DATABASE_URL",
                Some("postgres://postgres@postgres/postgres"),
            ),
            ("APPCONFIG_KAFKA_BROKERS", Some("kafka:29092")),
        ],
        || structenv::parse(&mut actual, None),
    )
    .unwrap();

    assert_eq!(expected, actual);
}

#[derive(Record, Debug, Default, PartialEq)]
pub struct Inner {
    pub bar: String,
}

#[test]
fn flattened_records_contribute_no_segment() {
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct Root {
        pub foo: Inner,
        #[env(flatten)]
        pub embedded: Inner,
    }

    let mut root = Root::default();
    let tree = structenv::compose(&mut root);
    let keys: Vec<_> = tree.keys().collect();

    assert_eq!(keys, ["ROOT_FOO_BAR", "ROOT_BAR"]);
}

#[test]
fn flattening_a_scalar_is_ignored() {
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct Root {
        #[env(flatten)]
        pub port: u16,
        pub host: String,
    }

    let mut root = Root::default();
    let keys: Vec<_> = structenv::compose(&mut root).keys().map(str::to_owned).collect();

    assert_eq!(keys, ["ROOT_HOST"]);
}

#[test]
fn empty_options_and_boxes_are_initialized() {
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct Root {
        pub maybe: Option<Inner>,
        pub boxed: Box<Inner>,
        #[env(flatten)]
        pub embedded: Option<Inner>,
        pub port: Option<u16>,
    }

    let mut root = Root::default();
    structenv::parse_with(
        &mut root,
        None,
        &source([
            ("ROOT_MAYBE_BAR", "a"),
            ("ROOT_BOXED_BAR", "b"),
            ("ROOT_BAR", "c"),
            ("ROOT_PORT", "8080"),
        ]),
    )
    .unwrap();

    assert_eq!(root.maybe, Some(Inner { bar: "a".into() }));
    assert_eq!(root.boxed.bar, "b");
    assert_eq!(root.embedded, Some(Inner { bar: "c".into() }));
    assert_eq!(root.port, Some(8080));
}

#[test]
fn keyed_containers_add_the_uppercased_key() {
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct Root {
        pub cfg: HashMap<String, Inner>,
    }

    let mut root = Root {
        cfg: HashMap::from([
            ("x".to_owned(), Inner::default()),
            ("y".to_owned(), Inner::default()),
        ]),
    };

    structenv::parse_with(
        &mut root,
        None,
        &source([("ROOT_CFG_X_BAR", "first"), ("ROOT_CFG_Y_BAR", "second")]),
    )
    .unwrap();

    assert_eq!(root.cfg["x"].bar, "first");
    assert_eq!(root.cfg["y"].bar, "second");
}

#[test]
fn keyed_container_entries_are_walked_in_key_order() {
    #[derive(Record, Debug, Default)]
    pub struct Root {
        pub limits: HashMap<String, u32>,
        pub ordered: BTreeMap<u8, Option<Inner>>,
    }

    let mut root = Root {
        limits: HashMap::from([
            ("zeta".to_owned(), 0),
            ("alpha".to_owned(), 0),
            ("mid".to_owned(), 0),
        ]),
        ordered: BTreeMap::from([(2, Some(Inner::default())), (1, None)]),
    };

    let tree = structenv::compose(&mut root);
    let fields: Vec<_> = tree.iter().map(|field| (field.key(), field.kind())).collect();

    assert_eq!(
        fields,
        [
            ("ROOT_LIMITS_ALPHA", Kind::U32),
            ("ROOT_LIMITS_MID", Kind::U32),
            ("ROOT_LIMITS_ZETA", Kind::U32),
            ("ROOT_ORDERED_2_BAR", Kind::Text),
        ]
    );
}

#[test]
fn absent_map_entries_stay_absent() {
    #[derive(Record, Debug, Default)]
    pub struct Root {
        pub cfg: BTreeMap<String, Option<Inner>>,
    }

    let mut root = Root {
        cfg: BTreeMap::from([("missing".to_owned(), None)]),
    };

    structenv::parse_with(&mut root, None, &source([("ROOT_CFG_MISSING_BAR", "x")])).unwrap();

    assert_eq!(root.cfg["missing"], None);
}

#[test]
fn sequences_are_opaque_leaves() {
    #[derive(Record, Debug, Default)]
    pub struct Root {
        pub topics: Vec<String>,
    }

    let mut root = Root::default();

    let tree = structenv::compose(&mut root);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.fields()[0].kind(), Kind::Unsupported);
    drop(tree);

    let options = structenv::Options::critical();
    structenv::parse_with(&mut root, Some(&options), &source([("ROOT_TOPICS", "a,b")])).unwrap();
    assert!(root.topics.is_empty());
}

#[test]
fn colliding_keys_are_filled_from_the_same_variable() {
    #[derive(Record, Debug, Default)]
    pub struct Root {
        pub a: A,
        pub a_b: String,
    }

    #[derive(Record, Debug, Default)]
    pub struct A {
        pub b: String,
    }

    let mut root = Root::default();

    let keys: Vec<_> = structenv::compose(&mut root).keys().map(str::to_owned).collect();
    assert_eq!(keys, ["ROOT_A_B", "ROOT_A_B"]);

    structenv::parse_with(&mut root, None, &source([("ROOT_A_B", "shared")])).unwrap();
    assert_eq!(root.a.b, "shared");
    assert_eq!(root.a_b, "shared");
}

#[test]
fn colliding_keys_fail_on_the_first_field_in_declaration_order() {
    #[derive(Record, Debug, Default)]
    pub struct Root {
        pub a: A,
        pub a_b: String,
    }

    #[derive(Record, Debug, Default)]
    pub struct A {
        pub b: u8,
    }

    let mut root = Root::default();
    let options = structenv::Options::critical();

    let err = structenv::parse_with(&mut root, Some(&options), &source([("ROOT_A_B", "text")]))
        .unwrap_err();

    assert_eq!(
        err,
        structenv::Error::NotUint {
            var: "ROOT_A_B".into()
        }
    );
    assert_eq!(root.a_b, "");
}
