#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use jsonmap::{
    mapping_enum, Constructor, Field, Getter, Mappable, ObjectType, Param, Setter, TypeDescriptor,
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub groups: Vec<String>,
}

impl User {
    pub fn jondoe() -> Self {
        User {
            id: 8777,
            username: "jondoe".into(),
            email: "jondoe@example.com".into(),
            groups: vec!["group 1".into(), "group 2".into()],
        }
    }
}

impl Mappable for User {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<User>("User")
            .marked()
            .field(Field::new("id", |u: &User| u.id, |u: &mut User, v| u.id = v))
            .field(Field::new("username", |u: &User| u.username.clone(), |u: &mut User, v| u.username = v))
            .field(Field::new("email", |u: &User| u.email.clone(), |u: &mut User, v| u.email = v))
            .field(Field::new("groups", |u: &User| u.groups.clone(), |u: &mut User, v| u.groups = v))
            .getter(Getter::new("getId", |u: &User| u.id).property())
            .getter(Getter::new("getUsername", |u: &User| u.username.clone()).property())
            .getter(Getter::new("getEmail", |u: &User| u.email.clone()).property())
            .getter(Getter::new("getGroups", |u: &User| u.groups.clone()).property())
            .constructor(Constructor::new(
                [
                    Param::of::<i32>().alias("id"),
                    Param::of::<String>().alias("username"),
                    Param::of::<String>().alias("email"),
                    Param::of::<Vec<String>>().alias("groups"),
                ],
                |args| {
                    Ok(User {
                        id: args.take()?,
                        username: args.take()?,
                        email: args.take()?,
                        groups: args.take()?,
                    })
                },
            ))
            .build()
    }
}

mapping_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum TokenKind { Personal, Service }
}

/// Filled through setters; its accessors are a separate, narrower surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiToken {
    pub token: String,
    pub expires: i64,
    pub scopes: Vec<String>,
    pub description: Option<String>,
    pub kind: TokenKind,
}

impl Default for ApiToken {
    fn default() -> Self {
        ApiToken {
            token: String::new(),
            expires: 0,
            scopes: Vec::new(),
            description: None,
            kind: TokenKind::Personal,
        }
    }
}

impl Mappable for ApiToken {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<ApiToken>("ApiToken")
            .marked()
            .field(Field::new("token", |t: &ApiToken| t.token.clone(), |t: &mut ApiToken, v| t.token = v))
            .field(Field::new("expires", |t: &ApiToken| t.expires, |t: &mut ApiToken, v| t.expires = v))
            .field(Field::new("scopes", |t: &ApiToken| t.scopes.clone(), |t: &mut ApiToken, v| t.scopes = v))
            .field(Field::new(
                "description",
                |t: &ApiToken| t.description.clone(),
                |t: &mut ApiToken, v| t.description = v,
            ))
            .field(Field::new("kind", |t: &ApiToken| t.kind, |t: &mut ApiToken, v| t.kind = v))
            .getter(Getter::new("getToken", |t: &ApiToken| t.token.clone()).property())
            .getter(Getter::new("getExpires", |t: &ApiToken| t.expires).property())
            .getter(Getter::new("getScopes", |t: &ApiToken| t.scopes.clone()).property())
            .getter(Getter::new("getKind", |t: &ApiToken| t.kind).property())
            .setter(Setter::new("setToken", |t: &mut ApiToken, v: String| t.token = v))
            .setter(Setter::new("setExpires", |t: &mut ApiToken, v: i64| t.expires = v))
            .setter(Setter::new("setScopes", |t: &mut ApiToken, v: Vec<String>| t.scopes = v))
            .setter(Setter::new("setDescription", |t: &mut ApiToken, v: Option<String>| {
                t.description = v
            }))
            .setter(Setter::new("setKind", |t: &mut ApiToken, v: TokenKind| t.kind = v))
            .default_constructor(ApiToken::default)
            .build()
    }
}

fn describe_token_reference() -> TypeDescriptor {
    TypeDescriptor::builder::<ApiToken>("TokenReference")
        .marked()
        .getter(Getter::new("getToken", |t: &ApiToken| t.token.clone()).property())
        .setter(Setter::new("setToken", |t: &mut ApiToken, v: String| t.token = v))
        .build()
}

/// Declared shape of [`ApiToken`] that only exposes the token itself.
pub fn token_reference() -> ObjectType {
    ObjectType::view::<ApiToken>("TokenReference", describe_token_reference)
}

mapping_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum ProviderKind { Azure, OneLogin, Okta, Generic }
}

pub const PROVIDERS: [ProviderKind; 4] = [
    ProviderKind::Azure,
    ProviderKind::OneLogin,
    ProviderKind::Okta,
    ProviderKind::Generic,
];

/// Setter-populated credentials; the secret half is private.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationSecret {
    pub client_id: String,
    pub client_secret: String,
}

impl Mappable for ApplicationSecret {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<ApplicationSecret>("ApplicationSecret")
            .marked()
            .field(
                Field::new(
                    "client_id",
                    |s: &ApplicationSecret| s.client_id.clone(),
                    |s: &mut ApplicationSecret, v| s.client_id = v,
                )
                .alias("clientId"),
            )
            .field(
                Field::new(
                    "client_secret",
                    |s: &ApplicationSecret| s.client_secret.clone(),
                    |s: &mut ApplicationSecret, v| s.client_secret = v,
                )
                .alias("clientSecret")
                .private(),
            )
            .setter(
                Setter::new("set_client_id", |s: &mut ApplicationSecret, v: String| s.client_id = v)
                    .alias("clientId"),
            )
            .setter(
                Setter::new("set_client_secret", |s: &mut ApplicationSecret, v: String| {
                    s.client_secret = v
                })
                .alias("clientSecret"),
            )
            .default_constructor(ApplicationSecret::default)
            .build()
    }
}

/// Built through its aliased constructor, with a nested object and an enum.
#[derive(Debug, Clone, PartialEq)]
pub struct ScimTenantConfig {
    pub tenant: String,
    pub provider: ProviderKind,
    pub secret: ApplicationSecret,
    pub enabled: bool,
    pub base_url: String,
}

impl ScimTenantConfig {
    pub fn acme(provider: ProviderKind) -> Self {
        ScimTenantConfig {
            tenant: "acme".into(),
            provider,
            secret: ApplicationSecret {
                client_id: "client-1".into(),
                client_secret: "s3cr3t".into(),
            },
            enabled: true,
            base_url: "https://scim.example.com/v2".into(),
        }
    }
}

impl Mappable for ScimTenantConfig {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<ScimTenantConfig>("ScimTenantConfig")
            .marked()
            .field(Field::new(
                "tenant",
                |c: &ScimTenantConfig| c.tenant.clone(),
                |c: &mut ScimTenantConfig, v| c.tenant = v,
            ))
            .field(Field::new(
                "provider",
                |c: &ScimTenantConfig| c.provider,
                |c: &mut ScimTenantConfig, v| c.provider = v,
            ))
            .field(Field::new(
                "secret",
                |c: &ScimTenantConfig| c.secret.clone(),
                |c: &mut ScimTenantConfig, v| c.secret = v,
            ))
            .field(Field::new(
                "enabled",
                |c: &ScimTenantConfig| c.enabled,
                |c: &mut ScimTenantConfig, v| c.enabled = v,
            ))
            .field(Field::new(
                "base_url",
                |c: &ScimTenantConfig| c.base_url.clone(),
                |c: &mut ScimTenantConfig, v| c.base_url = v,
            ))
            .getter(Getter::new("getTenant", |c: &ScimTenantConfig| c.tenant.clone()).property())
            .getter(Getter::new("getProvider", |c: &ScimTenantConfig| c.provider).property())
            .getter(
                Getter::new("getSecret", |c: &ScimTenantConfig| c.secret.clone())
                    .alias("applicationSecret"),
            )
            .getter(Getter::new("isEnabled", |c: &ScimTenantConfig| c.enabled).property())
            .getter(Getter::new("getBaseUrl", |c: &ScimTenantConfig| c.base_url.clone()).property())
            .constructor(Constructor::new(
                [
                    Param::of::<String>().alias("tenant"),
                    Param::of::<ProviderKind>().alias("provider"),
                    Param::of::<ApplicationSecret>().alias("applicationSecret"),
                    Param::of::<bool>().alias("enabled"),
                    Param::of::<String>().alias("baseUrl"),
                ],
                |args| {
                    Ok(ScimTenantConfig {
                        tenant: args.take()?,
                        provider: args.take()?,
                        secret: args.take()?,
                        enabled: args.take::<Option<bool>>()?.unwrap_or(false),
                        base_url: args.take()?,
                    })
                },
            ))
            .build()
    }
}

/// Graph node that may point back at an earlier node.
pub struct Node {
    name: String,
    peer: Option<NodeRef>,
}

#[derive(Clone)]
pub struct NodeRef(Rc<RefCell<Node>>);

impl NodeRef {
    pub fn new(name: &str) -> Self {
        NodeRef(Rc::new(RefCell::new(Node {
            name: name.to_string(),
            peer: None,
        })))
    }

    pub fn set_peer(&self, peer: Option<&NodeRef>) {
        self.0.borrow_mut().peer = peer.cloned();
    }
}

impl Mappable for NodeRef {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<NodeRef>("Node")
            .marked()
            .getter(Getter::new("getName", |n: &NodeRef| n.0.borrow().name.clone()).property())
            .getter(Getter::new("getPeer", |n: &NodeRef| n.0.borrow().peer.clone()).property())
            .build()
    }
}

/// Fully described, but never opted in.
#[derive(Debug, Default)]
pub struct Plain {
    pub id: i32,
}

impl Mappable for Plain {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Plain>("Plain")
            .field(Field::new("id", |p: &Plain| p.id, |p: &mut Plain, v| p.id = v))
            .getter(Getter::new("getId", |p: &Plain| p.id).property())
            .setter(Setter::new("setId", |p: &mut Plain, v: i32| p.id = v))
            .default_constructor(Plain::default)
            .build()
    }
}
