//! Descarga del dataset remoto.
//!
//! La descarga ocurre a lo sumo una vez por archivo: si el destino ya existe
//! se reutiliza tal cual.
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::error::AdapterError;

pub trait DatasetFetcher {
    /// Descarga `url` completa en `dest`.
    fn download(&self, url: &str, dest: &Path) -> Result<(), AdapterError>;

    /// Devuelve la ruta local del dataset, descargándolo sólo si falta.
    fn ensure_local(&self, url: &str, download_dir: &Path) -> Result<PathBuf, AdapterError> {
        let dest = download_dir.join(file_name_from_url(url));
        if dest.is_file() {
            log::info!("dataset ya presente en {}", dest.display());
            return Ok(dest);
        }
        fs::create_dir_all(download_dir).map_err(|e| AdapterError::io(download_dir, e))?;
        log::info!("descargando {url}");
        self.download(url, &dest)?;
        Ok(dest)
    }
}

/// Último segmento de la URL, sin query ni fragmento.
pub fn file_name_from_url(url: &str) -> String {
    let trimmed = url.split(['?', '#']).next().unwrap_or(url).trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "dataset.pb.gz".to_string(),
    }
}

/// Vuelca `reader` en `dest` a través de un temporal hermano: el destino sólo
/// aparece completo y un fallo a mitad no deja restos.
pub fn write_atomically<R: Read>(reader: &mut R, dest: &Path) -> Result<(), AdapterError> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AdapterError::io(dir, e))?;
    io::copy(reader, &mut tmp).map_err(|e| AdapterError::io(dest, e))?;
    tmp.persist(dest).map_err(|e| AdapterError::io(dest, e.error))?;
    Ok(())
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AdapterError> {
        let client = Client::builder().timeout(timeout)
                                      .user_agent(concat!("chemsynth/", env!("CARGO_PKG_VERSION")))
                                      .build()
                                      .map_err(|e| AdapterError::Fetch { url: String::new(),
                                                                         message: e.to_string() })?;
        Ok(Self { client })
    }
}

impl DatasetFetcher for HttpFetcher {
    fn download(&self, url: &str, dest: &Path) -> Result<(), AdapterError> {
        let fetch_err = |message: String| AdapterError::Fetch { url: url.to_string(),
                                                                message };
        let mut response = self.client
                               .get(url)
                               .send()
                               .and_then(|r| r.error_for_status())
                               .map_err(|e| fetch_err(e.to_string()))?;
        write_atomically(&mut response, dest).map_err(|e| fetch_err(e.to_string()))?;
        log::info!("descarga completa: {}", dest.display());
        Ok(())
    }
}
