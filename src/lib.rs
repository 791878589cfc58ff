pub mod archive;
pub mod cryptography;
pub mod error;
pub mod networking;
pub mod submission;
pub mod wire;

pub const KEY_SIZE: usize = 32;
pub const IV_SIZE: usize = 16;

pub const HANDIN_HOST: &str = "ada.cs.iit.edu";
pub const HANDIN_PORT: u16 = 8088;

/// RSA public key all submissions are wrapped under. Only the collection
/// server holds the matching private key.
pub const SUBMISSION_PUBLIC_KEY: &str = "\
-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEApQYCG7WtKKCZ1KgtRhYr
rqG+1iruP2RFkanKA4TX6aIu/HSZVHlg64ntsHMayhuDsRfdUEFZc+e61Jd01b0/
R5UWEJPOJ4PdE7Vllwv3NqbclUBu6Q+Q+lTpeYBu860eP97u5Uk6NG4eVzlkzDYT
kur84qT5sCWjgd1vjY2yuY5u+3nMtx5CfZxl/MrIbxq5E+SG6a7LGBi1B9vWOTSl
ASvDBn3cRWZEcMyxorKvizAv/uWIoSiQXNqn5PUI6FgO5lBSbAHydt5ztkBBAfIC
PwQeDXlBzTshML0Kbl2FYRhGAdaFbOJwIwEMGNJlKNt+2ujvzJfn7/UW/bgTbDNT
OQIDAQAB
-----END PUBLIC KEY-----
";
