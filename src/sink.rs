//! Destinations for encoded images.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{ Path, PathBuf };

/// Stores named blobs of content.
///
/// Encoders hand their finished output to a sink instead of doing I/O
/// themselves. Failures are reported as `io::Error` and left for the caller
/// to propagate.
pub trait Sink {
    fn put(&mut self, name: &str, content: &[u8]) -> io::Result<()>;
}

/// Writes content to files under a root directory.
///
/// The root directory is created on first use if it does not exist yet.
/// Names must be plain file names; anything with a directory component,
/// including absolute paths and `..`, is rejected with
/// `io::ErrorKind::InvalidInput` so output never leaves the root.
#[derive(Clone, Debug)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(root: P) -> FileSink {
        FileSink { root: root.as_ref().to_path_buf() }
    }

    /// The path that content stored under `name` is written to.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Sink for FileSink {
    fn put(&mut self, name: &str, content: &[u8]) -> io::Result<()> {
        if Path::new(name).file_name().map_or(true, |file| file != name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a plain file name", name)
            ));
        }

        fs::create_dir_all(&self.root)?;

        let path = self.path_of(name);
        fs::write(&path, content)?;
        log::info!("Saved {} bytes to {}", content.len(), path.display());

        Ok(())
    }
}

/// Keeps content in memory, keyed by name. Later writes replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        Default::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(|content| content.as_slice())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Sink for MemorySink {
    fn put(&mut self, name: &str, content: &[u8]) -> io::Result<()> {
        self.files.insert(name.to_string(), content.to_vec());
        Ok(())
    }
}

#[test]
fn memory_sink_stores_by_name() {
    let mut sink = MemorySink::new();
    assert!(sink.is_empty());

    sink.put("a.ppm", b"first").unwrap();
    sink.put("b.ppm", b"second").unwrap();
    sink.put("a.ppm", b"third").unwrap();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.get("a.ppm"), Some(&b"third"[..]));
    assert_eq!(sink.get("b.ppm"), Some(&b"second"[..]));
    assert_eq!(sink.get("c.ppm"), None);
}

#[test]
fn file_sink_creates_root_and_writes() {
    let root = std::env::temp_dir()
        .join(format!("ray-tracer-canvas-sink-{}", std::process::id()))
        .join("nested");
    let mut sink = FileSink::new(&root);

    sink.put("out.ppm", b"P3\n1 1\n255\n0 0 0\n").unwrap();

    let written = fs::read(sink.path_of("out.ppm")).unwrap();
    assert_eq!(written, b"P3\n1 1\n255\n0 0 0\n");

    fs::remove_dir_all(root.parent().unwrap()).unwrap();
}

#[test]
fn file_sink_rejects_paths_outside_root() {
    let root = std::env::temp_dir()
        .join(format!("ray-tracer-canvas-names-{}", std::process::id()));
    let mut sink = FileSink::new(&root);

    for name in &["/tmp/escape.ppm", "nested/out.ppm", "../out.ppm", "..", ""] {
        let err = sink.put(name, b"P3").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    assert!(!root.exists());
}
