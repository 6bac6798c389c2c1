//! Packaging manifest generator.
//!
//! Writes one NuGet packaging project per (platform, library type),
//! listing the built harfbuzz binaries for every architecture under
//! `runtimes/{runtime}/native`. Paths inside the manifest use backslashes
//! because the documents are consumed by MSBuild.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::matrix::{Arch, LibType, Platform};

const PACKAGE_ID_BASE: &str = "MIR.NativeLib.Harfbuzz";
const BASE_LIB_NAME: &str = "libharfbuzz";

/// Every build produces the main library and the subset library; both are
/// packaged. A target that stops producing one of these needs this to
/// become a per-combination list.
const BINARY_VARIANTS: [&str; 2] = ["", "-subset"];

/// Options for manifest generation.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Directory the .csproj files are written into.
    pub out_dir: PathBuf,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            out_dir: PathBuf::from("."),
        }
    }
}

/// Render the manifest for one (platform, lib_type). Returns the package
/// identifier and the document body.
pub fn csproj_content(platform: Platform, lib_type: LibType) -> (String, String) {
    let package_id = format!(
        "{}.{}.{}",
        PACKAGE_ID_BASE,
        lib_type.title(),
        platform.title()
    );
    let extension = lib_type.extension(platform);

    // Windows import conventions drop the "lib" prefix.
    let lib_name = match platform {
        Platform::Win => &BASE_LIB_NAME[3..],
        _ => BASE_LIB_NAME,
    };

    let mut entries = Vec::new();
    for arch in Arch::ALL {
        let runtime = format!("{}-{}", platform.prefix(), arch.name());
        let build_dir = format!("{}-{}", runtime, lib_type.name());
        for variant in BINARY_VARIANTS {
            entries.push(format!(
                "    <None Include=\"{build_dir}\\src\\{lib_name}{variant}{extension}\" \
                 Pack=\"true\" PackagePath=\"runtimes\\{runtime}\\native\" />"
            ));
        }
    }

    let content = format!(
        r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <PackageId>{package_id}</PackageId>
  </PropertyGroup>
  <ItemGroup>
{items}
  </ItemGroup>
  <Import Project="global.props" />
</Project>
"#,
        items = entries.join("\n"),
    );

    (package_id, content)
}

/// Write the manifests for the selected platforms, one file per library
/// type, in declared order. Existing files are overwritten; a failed write
/// aborts but leaves already-written files in place.
pub fn generate(platforms: &[Platform], opts: &GenOptions) -> Result<()> {
    for &platform in platforms {
        for lib_type in LibType::ALL {
            let (package_id, content) = csproj_content(platform, lib_type);
            let filename = format!("{package_id}.csproj");
            let path = opts.out_dir.join(&filename);
            fs::write(&path, content)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            tracing::debug!("wrote {}", path.display());
            println!("Generated '{filename}'");
        }
    }
    Ok(())
}
