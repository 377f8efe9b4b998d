#![expect(missing_docs)]

use jsonpluck::{Error, FromObject, Object, parse_str};

#[derive(Debug, PartialEq)]
struct Listener {
    host: String,
    port: i64,
}

impl FromObject for Listener {
    fn from_object(object: Object) -> Result<Self, Error> {
        Ok(Self {
            host: object.require("host")?,
            port: object.require("port")?,
        })
    }
}

#[derive(Debug, PartialEq)]
struct ServerConfig {
    listener: Listener,
    workers: i64,
    banner: Option<String>,
    admin: Option<Listener>,
}

impl FromObject for ServerConfig {
    fn from_object(object: Object) -> Result<Self, Error> {
        Ok(Self {
            listener: Listener::from_object(object.require_object("listener")?)?,
            workers: object.get("workers")?.unwrap_or(1),
            banner: object.get("banner")?,
            admin: object.get_as("admin")?,
        })
    }
}

const DOCUMENT: &str = r#"{
    "listener": {"host": "0.0.0.0", "port": 8080},
    "banner": null,
    "admin": {"host": "127.0.0.1", "port": 9090},
    "comment": "ignored by the mapping"
}"#;

#[test]
fn a_document_maps_onto_domain_types() {
    let root = Object::try_from(parse_str(DOCUMENT).unwrap()).unwrap();
    let config = ServerConfig::from_object(root).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            listener: Listener {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            workers: 1,
            banner: None,
            admin: Some(Listener {
                host: "127.0.0.1".into(),
                port: 9090,
            }),
        }
    );
}

#[test]
fn mapping_errors_surface_with_their_diagnostics() {
    let root = Object::try_from(parse_str(r#"{"listener": {"host": "h"}}"#).unwrap()).unwrap();
    assert_eq!(
        ServerConfig::from_object(root),
        Err(Error::KeyNotFound {
            key: "port".into(),
        })
    );
}
