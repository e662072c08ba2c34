// tests/integration_tests/common.rs
use anyhow::Result;
use feecalc::FormFields;
use feecalc::config::CONFIG_FILE_NAME;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub fn create_config_file(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn form_fields(volume: &str, cc: &str, rate: &str, comp: &str, own: &str) -> FormFields {
    FormFields {
        volume: Some(volume.to_owned()),
        cc_percent: Some(cc.to_owned()),
        comp_rate: Some(rate.to_owned()),
        comp_cost: Some(comp.to_owned()),
        own_cost: Some(own.to_owned()),
    }
}
