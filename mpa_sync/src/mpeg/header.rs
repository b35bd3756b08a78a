use super::constants::{
	BITRATES, FRAME_SIZE_COEFFICIENT, INTENSITY_BAND_LOWER, INTENSITY_BAND_UPPER, SAMPLE_RATES,
	SAMPLES,
};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::HeaderError;
use crate::macros::parse_mode_choice;

use byteorder::{BigEndian, ByteOrder};

/// The size of an MPEG audio frame header in bytes
pub const HEADER_SIZE: usize = 4;

// The 11 set bits every header starts with
pub(crate) const FRAME_SYNC_MASK: u32 = 0xFFE0_0000;

pub(crate) fn verify_frame_sync(data: u32) -> bool {
	data & FRAME_SYNC_MASK == FRAME_SYNC_MASK
}

/// MPEG Audio version
#[derive(Default, PartialEq, Eq, Copy, Clone, Debug)]
#[allow(missing_docs)]
pub enum MpegVersion {
	#[default]
	V1,
	V2,
	V2_5,
}

/// MPEG layer
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Layer {
	Layer1 = 1,
	Layer2 = 2,
	#[default]
	Layer3 = 3,
}

/// Channel mode
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ChannelMode {
	#[default]
	Stereo = 0,
	JointStereo = 1,
	/// Two independent mono channels
	DualChannel = 2,
	SingleChannel = 3,
}

/// A rarely-used decoder hint that the file must be de-emphasized
///
/// No emphasis is represented by `None` in [`FrameHeader::emphasis`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs, non_camel_case_types)]
pub enum Emphasis {
	/// 50/15 ms
	MS5015,
	/// CCIT J.17
	CCIT_J17,
	/// The emphasis bits are `11`, which the standard reserves
	///
	/// Only produced outside of [`ParsingMode::Strict`], where it makes the header invalid.
	Reserved,
}

/// The decoded channel mode extension bits
///
/// These are always decoded, but only carry meaning for [`ChannelMode::JointStereo`] frames.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ModeExtension {
	/// Layer 1 and 2: the subbands intensity stereo is applied to
	IntensityBands {
		/// The first band (4, 8, 12, or 16)
		lower: u8,
		/// The last band, always 31
		upper: u8,
	},
	/// Layer 3: which joint stereo techniques are in use
	Layer3 {
		/// Intensity stereo is enabled (`01` or `10`)
		intensity_stereo: bool,
		/// Mid/side stereo is enabled (`10` or `11`)
		ms_stereo: bool,
	},
}

impl Default for ModeExtension {
	fn default() -> Self {
		ModeExtension::Layer3 {
			intensity_stereo: false,
			ms_stereo: false,
		}
	}
}

/// The length of a frame, as far as the header can tell
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FrameLength {
	/// The frame spans this many bytes, including its header
	Bytes(u32),
	/// The frame uses a free bitrate, its length can't be derived from the header
	FreeFormat,
}

/// A decoded MPEG audio frame header
///
/// A header is a pure function of 4 bytes at an offset. It does not borrow the buffer it came
/// from, only remembering the offset.
///
/// Headers that failed to decode are [`FrameHeader::INVALID`]. Check [`FrameHeader::is_valid`]
/// before looking at any other field, as an invalid header has every field zeroed.
#[doc(alias = "MpegAudioHeader")]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
	/// Whether this header was successfully decoded
	pub valid: bool,
	/// Byte position of the header within the source buffer
	pub offset: usize,
	/// The size of the entire frame, including the header
	///
	/// This is computed, not read. It is 0 for free bitrate frames, see [`FrameHeader::frame_len`].
	///
	/// NOTE: A padded free bitrate frame is 0 as well, not 1. The padding byte alone says nothing
	///       about the length, and [`FrameHeader::frame_len`] reports these as
	///       [`FrameLength::FreeFormat`] either way.
	pub frame_size: u32,
	/// MPEG version
	pub version: MpegVersion,
	/// MPEG layer
	pub layer: Layer,
	/// The error check bit, taken as is
	///
	/// In the MPEG standard this is the "protection" bit, and a set bit means that *no* CRC
	/// follows the header. `crc_enabled` is `true` whenever the bit is set.
	///
	/// The 16-bit CRC that may follow the header is never read or verified.
	pub crc_enabled: bool,
	/// The bitrate in kbps, 0 for free bitrate frames
	pub bitrate: u32,
	/// The sample rate in Hz
	pub sample_rate: u32,
	/// Whether the frame has an extra padding byte
	pub padding: bool,
	/// The channel mode
	pub channel_mode: ChannelMode,
	/// The channel mode extension, decoded per layer
	pub mode_extension: ModeExtension,
	/// Copyright flag
	pub copyright: bool,
	/// Original media flag
	pub original: bool,
	/// De-emphasis hint, `None` if there is no emphasis
	pub emphasis: Option<Emphasis>,
}

impl Default for FrameHeader {
	fn default() -> Self {
		Self::INVALID
	}
}

impl FrameHeader {
	/// A header that failed to decode
	pub const INVALID: Self = Self {
		valid: false,
		offset: 0,
		frame_size: 0,
		version: MpegVersion::V1,
		layer: Layer::Layer3,
		crc_enabled: false,
		bitrate: 0,
		sample_rate: 0,
		padding: false,
		channel_mode: ChannelMode::Stereo,
		mode_extension: ModeExtension::Layer3 {
			intensity_stereo: false,
			ms_stereo: false,
		},
		copyright: false,
		original: false,
		emphasis: None,
	};

	/// Decode the header at `offset` in `data`
	///
	/// This never reads out of bounds, an offset too close to (or past) the end of `data` simply
	/// produces [`FrameHeader::INVALID`].
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::mpeg::{FrameHeader, Layer, MpegVersion};
	///
	/// let data = [0x00, 0xFF, 0xFB, 0x90, 0x00];
	///
	/// let header = FrameHeader::decode(&data, 1);
	/// assert!(header.is_valid());
	/// assert_eq!(header.version, MpegVersion::V1);
	/// assert_eq!(header.layer, Layer::Layer3);
	/// assert_eq!(header.bitrate, 128);
	/// assert_eq!(header.frame_size, 417);
	///
	/// // Only 3 bytes left
	/// assert!(!FrameHeader::decode(&data, 2).is_valid());
	/// ```
	pub fn decode(data: &[u8], offset: usize) -> Self {
		Self::decode_with_options(data, offset, ParseOptions::new())
	}

	/// Same as [`FrameHeader::decode`], using the provided [`ParseOptions`]
	pub fn decode_with_options(data: &[u8], offset: usize, options: ParseOptions) -> Self {
		Self::try_decode(data, offset, options).unwrap_or(Self::INVALID)
	}

	/// Decode the header at `offset` in `data`, reporting why it failed
	///
	/// # Errors
	///
	/// * Fewer than 4 bytes are available at `offset`
	/// * The bytes do not form a valid header, see [`FrameHeader::parse`]
	pub fn try_decode(
		data: &[u8],
		offset: usize,
		options: ParseOptions,
	) -> Result<Self, HeaderError> {
		let Some(bytes) = offset
			.checked_add(HEADER_SIZE)
			.and_then(|end| data.get(offset..end))
		else {
			return Err(HeaderError::BufferExhausted);
		};

		let mut header = Self::parse(BigEndian::read_u32(bytes), options.parsing_mode)?;
		header.offset = offset;

		Ok(header)
	}

	/// Decode an already assembled big-endian header word
	///
	/// The resulting header has an offset of 0.
	///
	/// # Errors
	///
	/// * The top 11 bits are not set
	/// * The version, layer, bitrate, or sample rate use a reserved value
	/// * The emphasis is reserved, and `parsing_mode` is [`ParsingMode::Strict`]
	pub fn parse(data: u32, parsing_mode: ParsingMode) -> Result<Self, HeaderError> {
		if !verify_frame_sync(data) {
			return Err(HeaderError::NoFrameSync);
		}

		let version = match (data >> 19) & 0b11 {
			0b00 => MpegVersion::V2_5,
			0b10 => MpegVersion::V2,
			0b11 => MpegVersion::V1,
			_ => {
				log::trace!("MPEG: Frame header uses a reserved version");
				return Err(HeaderError::BadVersion);
			},
		};

		let version_index = if version == MpegVersion::V1 { 0 } else { 1 };

		let layer = match (data >> 17) & 0b11 {
			0b01 => Layer::Layer3,
			0b10 => Layer::Layer2,
			0b11 => Layer::Layer1,
			_ => {
				log::trace!("MPEG: Frame header uses a reserved layer");
				return Err(HeaderError::BadLayer);
			},
		};

		let layer_index = (layer as usize) - 1;

		// The CRC itself (if any) is never read
		let crc_enabled = ((data >> 16) & 1) == 1;

		let bitrate_index = ((data >> 12) & 0xF) as usize;
		if bitrate_index == 0b1111 {
			log::trace!("MPEG: Frame header uses a bad bitrate index");
			return Err(HeaderError::BadBitrate);
		}

		// Index 0 is a free bitrate
		let bitrate = BITRATES[version_index][layer_index][bitrate_index];

		let sample_rate_index = ((data >> 10) & 0b11) as usize;
		let sample_rate = match sample_rate_index {
			0b11 => {
				log::trace!("MPEG: Frame header uses a reserved sample rate");
				return Err(HeaderError::BadSampleRate);
			},
			_ => SAMPLE_RATES[version as usize][sample_rate_index],
		};

		let padding = ((data >> 9) & 1) == 1;

		let channel_mode = match (data >> 6) & 0b11 {
			0b00 => ChannelMode::Stereo,
			0b01 => ChannelMode::JointStereo,
			0b10 => ChannelMode::DualChannel,
			0b11 => ChannelMode::SingleChannel,
			_ => unreachable!(),
		};

		let mode_extension_bits = ((data >> 4) & 0b11) as usize;
		let mode_extension = match layer {
			Layer::Layer3 => ModeExtension::Layer3 {
				intensity_stereo: matches!(mode_extension_bits, 0b01 | 0b10),
				ms_stereo: matches!(mode_extension_bits, 0b10 | 0b11),
			},
			Layer::Layer1 | Layer::Layer2 => ModeExtension::IntensityBands {
				lower: INTENSITY_BAND_LOWER[mode_extension_bits],
				upper: INTENSITY_BAND_UPPER,
			},
		};

		let copyright = ((data >> 3) & 1) == 1;
		let original = ((data >> 2) & 1) == 1;

		let emphasis = match data & 0b11 {
			0b00 => None,
			0b01 => Some(Emphasis::MS5015),
			0b10 => Some(Emphasis::CCIT_J17),
			_ => parse_mode_choice!(
				parsing_mode,
				STRICT: {
					log::trace!("MPEG: Frame header uses a reserved emphasis");
					return Err(HeaderError::ReservedEmphasis);
				},
				DEFAULT: Some(Emphasis::Reserved),
			),
		};

		// The size can't be known for free bitrate frames, padding or not
		let frame_size = if bitrate == 0 {
			0
		} else {
			(FRAME_SIZE_COEFFICIENT * bitrate * 1000 / sample_rate) + u32::from(padding)
		};

		Ok(Self {
			valid: true,
			offset: 0,
			frame_size,
			version,
			layer,
			crc_enabled,
			bitrate,
			sample_rate,
			padding,
			channel_mode,
			mode_extension,
			copyright,
			original,
			emphasis,
		})
	}

	/// Whether this header was successfully decoded
	pub fn is_valid(&self) -> bool {
		self.valid
	}

	/// Whether this is a valid header using a free bitrate
	pub fn is_free_format(&self) -> bool {
		self.valid && self.bitrate == 0
	}

	/// The length of this frame, or `None` if the header is invalid
	///
	/// NOTE: The length is `144 * bitrate / sample_rate (+ 1 if padded)` for every layer. This
	///       is known to hold for Layer 3, Layer 1 streams may not agree with it.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::mpeg::{FrameHeader, FrameLength};
	///
	/// let header = FrameHeader::decode(&[0xFF, 0xFB, 0x90, 0x00], 0);
	/// assert_eq!(header.frame_len(), Some(FrameLength::Bytes(417)));
	///
	/// // Bitrate index 0
	/// let header = FrameHeader::decode(&[0xFF, 0xFB, 0x00, 0x00], 0);
	/// assert_eq!(header.frame_len(), Some(FrameLength::FreeFormat));
	/// ```
	pub fn frame_len(&self) -> Option<FrameLength> {
		if !self.valid {
			return None;
		}

		if self.bitrate == 0 || self.frame_size == 0 {
			return Some(FrameLength::FreeFormat);
		}

		Some(FrameLength::Bytes(self.frame_size))
	}

	/// The offset directly after this frame, if its length is known
	pub fn end_offset(&self) -> Option<usize> {
		match self.frame_len()? {
			FrameLength::Bytes(len) => self.offset.checked_add(len as usize),
			FrameLength::FreeFormat => None,
		}
	}

	/// The number of channels, 0 for an invalid header
	pub fn channels(&self) -> u8 {
		if !self.valid {
			return 0;
		}

		if self.channel_mode == ChannelMode::SingleChannel {
			1
		} else {
			2
		}
	}

	/// The number of samples (per channel) in this frame, 0 for an invalid header
	pub fn samples_per_frame(&self) -> u16 {
		if !self.valid {
			return 0;
		}

		let version_index = if self.version == MpegVersion::V1 { 0 } else { 1 };
		SAMPLES[(self.layer as usize) - 1][version_index]
	}

	/// The Layer 1/2 intensity stereo band range, for joint stereo frames
	pub fn intensity_bands(&self) -> Option<(u8, u8)> {
		match self.mode_extension {
			ModeExtension::IntensityBands { lower, upper }
				if self.valid && self.channel_mode == ChannelMode::JointStereo =>
			{
				Some((lower, upper))
			},
			_ => None,
		}
	}

	/// Whether a Layer 3 joint stereo frame uses intensity stereo
	pub fn intensity_stereo(&self) -> bool {
		match self.mode_extension {
			ModeExtension::Layer3 {
				intensity_stereo, ..
			} => self.valid && self.channel_mode == ChannelMode::JointStereo && intensity_stereo,
			ModeExtension::IntensityBands { .. } => false,
		}
	}

	/// Whether a Layer 3 joint stereo frame uses mid/side stereo
	pub fn ms_stereo(&self) -> bool {
		match self.mode_extension {
			ModeExtension::Layer3 { ms_stereo, .. } => {
				self.valid && self.channel_mode == ChannelMode::JointStereo && ms_stereo
			},
			ModeExtension::IntensityBands { .. } => false,
		}
	}

	/// Whether two headers belong to the same stream
	///
	/// The version, layer, and sample rate never change within a stream. If they do, one of
	/// the headers is most likely a false sync.
	pub fn same_stream(&self, other: &Self) -> bool {
		self.valid
			&& other.valid
			&& self.version == other.version
			&& self.layer == other.layer
			&& self.sample_rate == other.sample_rate
	}
}
