//! Combines `requirements` with insta to document the environment variables
//! read by an application, along with the values it falls back to.

#[test]
fn snapshot_as_documentation() {
    use foo::bar::App;
    // simulate module structure.
    #[allow(unused)]
    mod foo {
        pub mod bar {
            use std::collections::BTreeMap;

            use structenv::Record;

            use super::baz::KafkaConfig;

            #[derive(Record)]
            pub struct App {
                pub database_url: String,
                pub port: u16,
                pub debug: bool,
                pub kafka: KafkaConfig,
                pub regions: BTreeMap<String, Region>,
            }

            #[derive(Record, Default)]
            pub struct Region {
                pub endpoint: String,
                pub weight: f32,
            }

            impl Default for App {
                fn default() -> Self {
                    Self {
                        database_url: "postgres://postgres@postgres/postgres".into(),
                        port: 3000,
                        debug: false,
                        kafka: KafkaConfig::default(),
                        regions: BTreeMap::from([
                            ("us".into(), Region::default()),
                            ("eu".into(), Region::default()),
                        ]),
                    }
                }
            }
        }

        pub mod baz {
            use structenv::Record;

            #[derive(Record, Default)]
            pub struct KafkaConfig {
                pub broker: String,
                pub partitions: Option<u32>,
            }
        }
    }

    insta::assert_snapshot!(structenv::requirements(&mut App::default()))
}
