use crate::util::{V1_L3_128K, V1_L3_320K, frame, id3v2_tag, walk};
use mpa_sync::config::{GlobalOptions, apply_global_options};
use mpa_sync::error::ErrorKind;
use mpa_sync::id3::v2::tag_size;

use std::io::{Seek, Write};

fn stream() -> Vec<u8> {
	let mut data = id3v2_tag(64, false);
	data.extend(frame(V1_L3_128K));
	data.extend(frame(V1_L3_320K));
	data
}

#[test_log::test]
fn read_path_and_walk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&stream()).unwrap();
	file.flush().unwrap();

	let data = mpa_sync::io::read_from_path(file.path()).unwrap();
	assert_eq!(data, stream());

	assert_eq!(walk(&data, tag_size(&data)), [74, 491]);
}

#[test_log::test]
fn read_reader_and_walk() {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(&stream()).unwrap();
	file.rewind().unwrap();

	let data = mpa_sync::io::read_from(&mut file).unwrap();
	assert_eq!(walk(&data, tag_size(&data)), [74, 491]);
}

#[test_log::test]
fn allocation_limit() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&stream()).unwrap();
	file.flush().unwrap();

	apply_global_options(GlobalOptions::new().allocation_limit(100));
	let result = mpa_sync::io::read_from_path(file.path());
	apply_global_options(GlobalOptions::default());

	let err = result.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));
}
