/// Get a systemd credential (see <https://systemd.io/CREDENTIALS/>).
#[cfg(target_os = "linux")]
pub(crate) fn get_credential(name: &str) -> anyhow::Result<secrecy::SecretString> {
    use anyhow::Context;
    use libsystemd::credentials::CredentialsLoader;
    use std::io::{BufReader, Read};

    let loader = CredentialsLoader::open()
        .with_context(|| format!("{name} not passed and no systemd credentials available"))?;
    let file = loader.get(name)?;
    let mut buffer = String::new();
    let mut reader = BufReader::new(file);
    reader.read_to_string(&mut buffer)?;
    Ok(secrecy::SecretString::new(buffer.trim_end().to_owned()))
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn get_credential(name: &str) -> anyhow::Result<secrecy::SecretString> {
    anyhow::bail!("{name} not passed and systemd credentials are only available on Linux")
}
