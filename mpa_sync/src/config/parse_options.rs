/// Options to control how frame headers are decoded and searched for
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) max_junk_bytes: Option<usize>,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	max_junk_bytes: None,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			max_junk_bytes: None,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The maximum number of junk bytes a single search may skip
	///
	/// Streams may have junk between frames (tag padding remnants, broken frames). A search
	/// starting at some offset will give up after examining this many bytes, even if the
	/// end offset hasn't been reached. `None` (the default) means the search is only bounded
	/// by the end offset.
	///
	/// # Examples
	///
	/// ```rust
	/// use mpa_sync::config::ParseOptions;
	///
	/// // Don't wander more than 4KiB away from where a frame should be
	/// let parsing_options = ParseOptions::new().max_junk_bytes(Some(4096));
	/// ```
	pub fn max_junk_bytes(&mut self, max_junk_bytes: Option<usize>) -> Self {
		self.max_junk_bytes = max_junk_bytes;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust
/// use mpa_sync::config::{ParseOptions, ParsingMode};
/// use mpa_sync::mpeg::FrameScanner;
///
/// let data = [0xFF, 0xFB, 0x90, 0x03];
///
/// // A reserved emphasis is not acceptable to us
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let header = FrameScanner::new(&data).options(parsing_options).first(0, data.len());
/// assert!(!header.is_valid());
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly reject questionable input
	///
	/// ## Examples of behavior
	///
	/// * Reserved emphasis (`11`) - The header is invalid
	/// * ID3v2 size bytes with their high bit set - There is no tag
	/// * Free bitrate frame - The walk stops
	Strict,
	/// Default mode, only rejects what the MPEG audio standard marks as reserved
	/// in fields that change the frame layout
	///
	/// ## Examples of behavior
	///
	/// * Reserved emphasis (`11`) - The header is valid, with [`Emphasis::Reserved`](crate::mpeg::Emphasis::Reserved)
	/// * ID3v2 size bytes with their high bit set - The high bits are ignored
	/// * Free bitrate frame - The walk stops
	#[default]
	BestAttempt,
	/// Least eager to give up, may produce questionable output
	///
	/// ## Examples of behavior
	///
	/// * Reserved emphasis (`11`) - The header is valid, with [`Emphasis::Reserved`](crate::mpeg::Emphasis::Reserved)
	/// * ID3v2 size bytes with their high bit set - The high bits are ignored
	/// * Free bitrate frame - The search resumes directly after the frame's header
	Relaxed,
}
