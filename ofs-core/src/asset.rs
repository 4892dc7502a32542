//! Locating and reading the files the demos load at startup.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Root directory that relative asset paths are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// `<root>/shaders/<demo>/<file>`.
    pub fn shader(&self, demo: &str, file: &str) -> PathBuf {
        self.root.join("shaders").join(demo).join(file)
    }

    /// `<root>/textures/<file>`.
    pub fn texture(&self, file: &str) -> PathBuf {
        self.root.join("textures").join(file)
    }

    /// The vertex and fragment shader paths of a demo.
    pub fn shader_pair(&self, demo: &str, stem: &str) -> (PathBuf, PathBuf) {
        (
            self.shader(demo, &format!("{stem}.vs.glsl")),
            self.shader(demo, &format!("{stem}.fs.glsl")),
        )
    }
}

/// Source text of a vertex and a fragment shader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Reads both stages from disk.
    pub fn read(vertex_path: &Path, fragment_path: &Path) -> Result<Self, AssetError> {
        Ok(Self {
            vertex: read_text(vertex_path)?,
            fragment: read_text(fragment_path)?,
        })
    }
}

pub fn read_text(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_resolved_under_the_root() {
        let root = AssetRoot::new("/data");
        assert_eq!(
            root.shader("lighting", "cube.vs.glsl"),
            PathBuf::from("/data/shaders/lighting/cube.vs.glsl")
        );
        assert_eq!(
            root.texture("wood.png"),
            PathBuf::from("/data/textures/wood.png")
        );
        let (vs, fs) = root.shader_pair("base", "shader");
        assert_eq!(vs, PathBuf::from("/data/shaders/base/shader.vs.glsl"));
        assert_eq!(fs, PathBuf::from("/data/shaders/base/shader.fs.glsl"));
    }

    #[test]
    fn reads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        let root = AssetRoot::new(dir.path());
        let (vs, fs) = root.shader_pair("base", "shader");
        std::fs::create_dir_all(vs.parent().unwrap()).unwrap();
        std::fs::write(&vs, "#version 330 core\nvoid main() {}\n").unwrap();
        std::fs::write(&fs, "#version 330 core\nout vec4 FragColor;\n").unwrap();

        let source = ShaderSource::read(&vs, &fs).unwrap();
        assert!(source.vertex.starts_with("#version 330 core"));
        assert!(source.fragment.contains("FragColor"));
    }

    #[test]
    fn missing_stage_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let vs = dir.path().join("present.vs.glsl");
        let fs = dir.path().join("missing.fs.glsl");
        std::fs::write(&vs, "void main() {}").unwrap();

        let err = ShaderSource::read(&vs, &fs).unwrap_err();
        let AssetError::Read { path, .. } = &err;
        assert_eq!(path, &fs);
        assert!(err.to_string().contains("missing.fs.glsl"));
    }
}
