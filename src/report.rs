//! Plain text report of a display's EGL support.

use std::io::{self, Write};

use eglew::{Extension, Support};

/// Column where the status of a line starts.
const STATUS_COLUMN: usize = 64;

/// Driver details printed before the extension table.
#[derive(Default, Debug)]
pub struct Header {
    pub library: String,
    pub vendor: Option<String>,
    pub version: Option<String>,
    pub client_apis: Option<String>,
    pub client_extensions: Vec<String>,
}

/// Write the header and the status of every selected entry.
///
/// `names` restricts the table to the given registry names, all tracked entries are listed when
/// it is empty. `resolves` reports whether a single entry point can be loaded.
pub fn write<W, F>(
    out: &mut W,
    header: &Header,
    support: &Support,
    names: &[String],
    print_extensions: bool,
    mut resolves: F,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&str) -> bool,
{
    let (major, minor) = support.version();
    writeln!(out, "EGL library: {}", header.library)?;
    writeln!(out, "EGL version {}.{} is supported", major, minor)?;
    writeln!(out, "Reported version: {}", header.version.as_deref().unwrap_or("unknown"))?;
    writeln!(out, "Vendor: {}", header.vendor.as_deref().unwrap_or("unknown"))?;
    if let Some(client_apis) = &header.client_apis {
        writeln!(out, "Client APIs: {}", client_apis)?;
    }

    if print_extensions {
        writeln!(out)?;
        writeln!(out, "Client extensions: {}", header.client_extensions.join(" "))?;
        let display_extensions: Vec<&str> = support.advertised().collect();
        writeln!(out, "Display extensions: {}", display_extensions.join(" "))?;
    }

    let selected: Vec<Extension> = if names.is_empty() {
        Extension::ALL.to_vec()
    } else {
        names.iter().filter_map(|name| Extension::from_name(name)).collect()
    };

    for name in names.iter().filter(|name| Extension::from_name(name).is_none()) {
        writeln!(out)?;
        write_status(out, name, "UNKNOWN", 0)?;
    }

    for ext in selected {
        writeln!(out)?;
        let status = if support.has(ext) { "OK" } else { "MISSING" };
        write_status(out, ext.name(), status, 0)?;
        writeln!(out, "{}", "-".repeat(ext.name().len()))?;

        for &entry in ext.entry_points() {
            let status = if resolves(entry) { "OK" } else { "MISSING" };
            write_status(out, entry, status, 2)?;
        }
    }

    if !names.is_empty() {
        let joined = names.join(" ");
        writeln!(out)?;
        let status = if support.is_supported(&joined) { "yes" } else { "no" };
        writeln!(out, "All requested names supported: {}", status)?;
    }

    Ok(())
}

fn write_status<W: Write>(out: &mut W, name: &str, status: &str, indent: usize) -> io::Result<()> {
    let label = format!("{:indent$}{}:", "", name, indent = indent);
    let width = STATUS_COLUMN.saturating_sub(status.len()).max(label.len() + 1);
    writeln!(out, "{:<width$}{}", label, status, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(support: &Support, names: &[String], print_extensions: bool) -> String {
        let header = Header {
            library: String::from("libEGL.so.1"),
            vendor: Some(String::from("Mesa Project")),
            version: Some(String::from("1.4")),
            client_apis: None,
            client_extensions: vec![String::from("EGL_EXT_client_extensions")],
        };

        let mut out = Vec::new();
        write(&mut out, &header, support, names, print_extensions, |name| {
            name != "eglDestroyImageKHR"
        })
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn status_is_aligned() {
        let mut out = Vec::new();
        write_status(&mut out, "EGL_KHR_debug", "OK", 0).unwrap();
        let line = String::from_utf8(out).unwrap();

        assert_eq!(line.len(), STATUS_COLUMN + 1);
        assert!(line.starts_with("EGL_KHR_debug:"));
        assert!(line.ends_with("OK\n"));
    }

    #[test]
    fn long_names_keep_a_space() {
        let mut out = Vec::new();
        let name = "x".repeat(STATUS_COLUMN);
        write_status(&mut out, &name, "OK", 0).unwrap();

        assert!(String::from_utf8(out).unwrap().ends_with(": OK\n"));
    }

    #[test]
    fn filtered_report() {
        let support = Support::new((1, 4), "EGL_KHR_image_base", false, |_| true);
        let names = vec![String::from("EGL_KHR_image_base"), String::from("EGL_FOO_bar")];
        let report = render(&support, &names, false);

        assert!(report.contains("EGL version 1.4 is supported"));
        assert!(report.contains("EGL_FOO_bar:"));
        assert!(report.contains("UNKNOWN"));
        assert!(report.contains("  eglCreateImageKHR:"));
        assert!(!report.contains("EGL_KHR_debug"));
        assert!(report.contains("All requested names supported: no"));
    }

    #[test]
    fn full_report_lists_everything() {
        let support = Support::new((1, 5), "", false, |_| true);
        let report = render(&support, &[], true);

        for ext in Extension::ALL {
            assert!(report.contains(ext.name()), "{}", ext.name());
        }
        assert!(report.contains("Client extensions: EGL_EXT_client_extensions"));
        assert!(!report.contains("All requested names"));
    }
}
