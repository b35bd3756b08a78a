// Shorthand for return Err(MpaError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(MpaError::new(ErrorKind::Variant))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::MpaError::new(
			crate::error::ErrorKind::$variant,
		))
	};
}

// Shorthand for choosing a value per `ParsingMode`
//
// NOTE: `STRICT` and `RELAXED` are optional, anything missing falls through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr $(,)?
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, parse_mode_choice};
