use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use wgpu::naga::ShaderStage;

/// Outcome of loading or compiling one shader stage.
///
/// The caller decides the policy; the renderer's default is to log the
/// diagnostic and continue without a pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read shader source at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },
}

/// Reads a shader stage fully into memory.
pub fn read_shader_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a shader stage, degrading to an empty source string when the file
/// cannot be read. The empty string then fails compilation and surfaces
/// through the compile diagnostics instead.
pub(crate) fn load_shader_source(path: &Path) -> String {
    match read_shader_source(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!(error = %err, "shader source unavailable; substituting an empty string");
            String::new()
        }
    }
}

/// Compiles one GLSL stage, capturing the driver diagnostic on failure.
///
/// The validation error scope around module creation is the analog of
/// checking the compile status and fetching the info log.
pub(crate) fn compile_shader(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
    label: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Borrowed(source),
            stage,
            defines: &[],
        },
    });
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(ShaderError::Compile {
            stage: stage_name(stage),
            log: error.to_string(),
        });
    }
    Ok(module)
}

fn stage_name(stage: ShaderStage) -> &'static str {
    match stage {
        ShaderStage::Vertex => "vertex",
        ShaderStage::Fragment => "fragment",
        _ => "shader",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_shader_source_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.vert");
        std::fs::write(&path, "#version 450\nvoid main() {}\n").unwrap();
        let source = read_shader_source(&path).unwrap();
        assert!(source.contains("void main"));
        assert_eq!(load_shader_source(&path), source);
    }

    #[test]
    fn missing_shader_degrades_to_an_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.frag");
        assert!(matches!(
            read_shader_source(&path),
            Err(ShaderError::Io { .. })
        ));
        assert_eq!(load_shader_source(&path), "");
    }
}
