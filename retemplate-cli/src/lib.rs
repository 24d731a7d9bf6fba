use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use retemplate_codegen::{CodegenOptions, Generator};

pub mod fixture;

pub use fixture::Fixture;

/// Regenerate template source from a render-tree fixture file. When
/// `out` is given the result is also written there.
pub fn generate_cmd(input: &Path, out: Option<&Path>, options: CodegenOptions) -> Result<String> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;

    let fixture = Fixture::from_json(&src)
        .with_context(|| format!("failed to parse render tree in {}", input.display()))?;
    let roots = fixture
        .build()
        .with_context(|| format!("invalid render tree in {}", input.display()))?;
    log::debug!("{}: {} root node(s)", input.display(), roots.len());

    let generator = Generator::with_options(options);
    let code = pollster::block_on(generator.generate(&roots))
        .with_context(|| format!("failed to generate template for {}", input.display()))?;

    if let Some(out_path) = out {
        if let Some(dir) = out_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(out_path, format!("{code}\n"))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        log::debug!("wrote {}", out_path.display());
    }
    Ok(code)
}
