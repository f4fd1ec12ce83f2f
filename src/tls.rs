// src/tls.rs
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::ServerConfig;

#[derive(Debug)]
pub enum TlsError {
    MissingFile(String),
    Read(String, std::io::Error),
    NoCertificates(String),
    NoPrivateKey(String),
    Rustls(rustls::Error),
}

impl fmt::Display for TlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(path) => {
                write!(f, "TLS file not found: {} (HTTPS cannot start without it)", path)
            }
            Self::Read(path, e) => write!(f, "Failed to read TLS file {}: {}", path, e),
            Self::NoCertificates(path) => write!(f, "No certificates found in {}", path),
            Self::NoPrivateKey(path) => write!(f, "No private key found in {}", path),
            Self::Rustls(e) => write!(f, "Invalid TLS certificate/key pair: {}", e),
        }
    }
}

impl std::error::Error for TlsError {}

/// Loads the certificate chain and private key into a rustls server config.
/// Both files must exist; serving plaintext is not an acceptable fallback.
pub fn load_rustls_config(cert_path: &str, key_path: &str) -> Result<ServerConfig, TlsError> {
    for path in [cert_path, key_path] {
        if !Path::new(path).exists() {
            return Err(TlsError::MissingFile(path.to_string()));
        }
    }

    let cert_file = File::open(cert_path)
        .map_err(|e| TlsError::Read(cert_path.to_string(), e))?;
    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut BufReader::new(cert_file))
        .collect::<Result<_, _>>()
        .map_err(|e| TlsError::Read(cert_path.to_string(), e))?;
    if certs.is_empty() {
        return Err(TlsError::NoCertificates(cert_path.to_string()));
    }

    let key_file = File::open(key_path)
        .map_err(|e| TlsError::Read(key_path.to_string(), e))?;
    let key: PrivateKeyDer<'static> = rustls_pemfile::private_key(&mut BufReader::new(key_file))
        .map_err(|e| TlsError::Read(key_path.to_string(), e))?
        .ok_or_else(|| TlsError::NoPrivateKey(key_path.to_string()))?;

    info!("Loaded TLS materials from {} and {}", cert_path, key_path);

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(TlsError::Rustls)
}
