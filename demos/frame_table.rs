#![allow(missing_docs)]

use mpa_sync::config::{ParseOptions, ParsingMode};
use mpa_sync::id3::v2::tag_size_with_options;
use mpa_sync::mpeg::{FrameHeader, FrameScanner, MpegVersion};

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "frame_table", about = "Print the MPEG audio frame headers of a file")]
struct Opt {
	/// The number of headers to print
	#[structopt(short = "n", long, default_value = "50")]
	count: usize,

	/// Skip headers with a different version, layer, or sample rate than the first
	#[structopt(short, long)]
	same_stream: bool,

	/// Use strict parsing
	#[structopt(long)]
	strict: bool,

	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn version_str(version: MpegVersion) -> &'static str {
	match version {
		MpegVersion::V1 => "1",
		MpegVersion::V2 => "2",
		MpegVersion::V2_5 => "2.5",
	}
}

fn flag(set: bool) -> &'static str {
	if set { "Y" } else { " " }
}

fn print_first(first: &FrameHeader) {
	println!("First valid header at {:08x}:", first.offset);
	println!(
		"  MPEG{} Layer {}",
		version_str(first.version),
		first.layer as u8
	);
	println!("  Bit rate:    {} kbps", first.bitrate);
	println!("  Sample rate: {} Hz", first.sample_rate);
	println!("  Channels:    {}", first.channels());
	println!("  Copyright: {}", if first.copyright { "yes" } else { "no" });
	println!("  Original:  {}", if first.original { "yes" } else { "no" });
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	let data = mpa_sync::io::read_from_path(&opt.path).expect("ERROR: Failed to read file!");

	let mut options = ParseOptions::new();
	if opt.strict {
		options = options.parsing_mode(ParsingMode::Strict);
	}

	let start = tag_size_with_options(&data, options);
	println!("Starting MPEG header search at {start:08x}...");

	let scanner = FrameScanner::new(&data).options(options);
	let first = scanner.first(start, data.len());
	if !first.is_valid() {
		println!("No valid MPEG audio headers found.");
		return;
	}

	print_first(&first);
	println!();

	if opt.same_stream {
		println!(
			"Printing first {} MPEG{} Layer {} headers found.\n",
			opt.count,
			version_str(first.version),
			first.layer as u8
		);
	} else {
		println!("Printing first {} MPEG headers found.\n", opt.count);
	}

	println!(" Location | MPEG | L | Kbps | Hz    | E | C | O | Frame ");
	println!("----------|------|---|------|-------|---|---|---|-------");

	let mut frames = scanner.frames_from(first.offset);
	let headers = frames
		.by_ref()
		.filter(|header| !opt.same_stream || header.same_stream(&first))
		.take(opt.count);

	for header in headers {
		println!(
			" {:08x} | V{:<3} | {} | {:4} | {:5} | {} | {} | {} | {:5} ",
			header.offset,
			version_str(header.version),
			header.layer as u8,
			header.bitrate,
			header.sample_rate,
			flag(header.crc_enabled),
			flag(header.copyright),
			flag(header.original),
			header.frame_size
		);
	}

	if let Some(reason) = frames.stop_reason() {
		eprintln!("INFO: Stopped: {reason}");
	}
}
