use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::{open_optional, path_to_string, tokenize, ProbeError, Reading, Result};

pub const PROC_LOADAVG: &str = "/proc/loadavg";

/// Windows, in seconds, of the three averages in `/proc/loadavg`.
const DURATIONS: [u32; 3] = [60, 300, 900];

/// Three load values, process counts and the last pid.
const LOADAVG_NUMBER_OF_FIELDS: usize = 5;

/// Load average over a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadSample {
    /// Window length in seconds.
    pub duration: u32,
    pub average: f64,
}

/// Read the 1, 5 and 15 minute load averages, in that order.
///
/// Returns an empty list when `/proc/loadavg` cannot be opened.
pub fn read() -> Result<Vec<LoadSample>> {
    read_from(Path::new(PROC_LOADAVG)).map(Reading::into_value)
}

/// Read the load averages from `path`.
///
/// A file that cannot be opened is `Reading::Unavailable`. A file that opens
/// but cannot be read, such as a directory or non UTF-8 bytes, is reported
/// as `ProbeError::IO` rather than `ProbeError::UnexpectedContent`.
pub fn read_from(path: &Path) -> Result<Reading<Vec<LoadSample>>> {
    let mut file = match open_optional(path) {
        Some(file) => file,
        None => return Ok(Reading::Unavailable),
    };

    let mut raw_data = String::new();
    file.read_to_string(&mut raw_data)
        .map_err(|e| ProbeError::IO(e, path_to_string(path)))?;

    parse_load_average(path, &raw_data).map(Reading::Available)
}

fn parse_load_average(path: &Path, raw_data: &str) -> Result<Vec<LoadSample>> {
    let segments = tokenize(raw_data);
    if segments.len() != LOADAVG_NUMBER_OF_FIELDS {
        return Err(ProbeError::UnexpectedContent(format!(
            "Unexpected {}: {}",
            path.display(),
            raw_data.trim_end()
        )));
    }

    DURATIONS
        .iter()
        .zip(segments)
        .map(|(&duration, segment)| -> Result<LoadSample> {
            let average = segment.parse::<f64>().map_err(|e| {
                ProbeError::UnexpectedContent(format!(
                    "Failed to parse {} segment '{}': {}",
                    path.display(),
                    segment,
                    e
                ))
            })?;
            Ok(LoadSample { duration, average })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LoadSample;
    use crate::{ProbeError, Reading};
    use std::io::Write;
    use std::path::Path;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_read() {
        let samples = super::read().unwrap();
        assert_eq!(3, samples.len());
        assert!(samples.iter().all(|sample| sample.average >= 0.0));
    }

    #[test]
    fn test_read_from() {
        let path = Path::new("fixtures/linux/proc_loadavg");
        let samples = super::read_from(&path).unwrap().available().unwrap();

        let expected = vec![
            LoadSample { duration: 60, average: 0.01 },
            LoadSample { duration: 300, average: 0.02 },
            LoadSample { duration: 900, average: 0.03 },
        ];
        assert_eq!(expected, samples);
    }

    #[test]
    fn test_read_from_generated_content() {
        let file = write_fixture("0.10 0.20 0.15 1/200 1234\n");
        let samples = super::read_from(file.path()).unwrap().into_value();

        let durations: Vec<u32> = samples.iter().map(|s| s.duration).collect();
        let averages: Vec<f64> = samples.iter().map(|s| s.average).collect();
        assert_eq!(vec![60, 300, 900], durations);
        assert_eq!(vec![0.10, 0.20, 0.15], averages);
    }

    #[test]
    fn test_read_from_wrong_path() {
        let path = Path::new("/nonsense");
        match super::read_from(&path) {
            Ok(Reading::Unavailable) => (),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_read_from_too_few_segments() {
        let file = write_fixture("0.10 0.20 0.15 1/200\n");
        match super::read_from(file.path()) {
            Err(ProbeError::UnexpectedContent(_)) => (),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_read_from_too_many_segments() {
        let file = write_fixture("0.10 0.20 0.15 1/200 1234 5\n");
        match super::read_from(file.path()) {
            Err(ProbeError::UnexpectedContent(_)) => (),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_read_from_garbage_content() {
        let path = Path::new("fixtures/linux/proc_loadavg_garbage");
        match super::read_from(&path) {
            Err(ProbeError::UnexpectedContent(_)) => (),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_read_from_unparsable_average() {
        let file = write_fixture("0.10 high 0.15 1/200 1234\n");
        match super::read_from(file.path()) {
            Err(ProbeError::UnexpectedContent(message)) => assert!(message.contains("'high'")),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_read_from_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        match super::read_from(dir.path()) {
            Err(ProbeError::IO(_, _)) => (),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_read_from_invalid_utf8_is_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x30, 0x2e, 0xff, 0xfe]).unwrap();
        match super::read_from(file.path()) {
            Err(ProbeError::IO(_, _)) => (),
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_serialize() {
        let sample = LoadSample { duration: 300, average: 0.5 };
        assert_eq!(
            r#"{"duration":300,"average":0.5}"#,
            serde_json::to_string(&sample).unwrap()
        );
    }
}
