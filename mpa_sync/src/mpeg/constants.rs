// Bitrates in kbps, indexed by [version][layer][bitrate index]
//
//     bits     V1,L1   V1,L2   V1,L3   V2,L1   V2,L2&L3
//     0000     free    free    free    free    free
//     0001     32      32      32      32      8
//     0010     64      48      40      48      16
//     0011     96      56      48      56      24
//     0100     128     64      56      64      32
//     0101     160     80      64      80      40
//     0110     192     96      80      96      48
//     0111     224     112     96      112     56
//     1000     256     128     112     128     64
//     1001     288     160     128     144     80
//     1010     320     192     160     160     96
//     1011     352     224     192     176     112
//     1100     384     256     224     192     128
//     1101     416     320     256     224     144
//     1110     448     384     320     256     160
//     1111     bad     bad     bad     bad     bad
//
// "V2" covers both MPEG-2 and MPEG-2.5. Index 0 (free) and 15 (bad) are both 0 here, the
// header decoder rejects index 15 before it gets to the table.
pub(crate) const BITRATES: [[[u32; 16]; 3]; 2] = [
	[
		[
			0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
		], // V1 Layer 1
		[
			0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
		], // V1 Layer 2
		[
			0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
		], // V1 Layer 3
	],
	[
		[
			0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
		], // V2/V2.5 Layer 1
		[
			0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
		], // V2/V2.5 Layer 2
		[
			0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
		], // V2/V2.5 Layer 3
	],
];

// Sample rates in Hz, indexed by [version][sample rate index]
//
//     bits     MPEG1       MPEG2       MPEG2.5
//     00       44100 Hz    22050 Hz    11025 Hz
//     01       48000 Hz    24000 Hz    12000 Hz
//     10       32000 Hz    16000 Hz    8000 Hz
//     11       reserved    reserved    reserved
pub(crate) const SAMPLE_RATES: [[u32; 3]; 3] = [
	[44100, 48000, 32000], // V1
	[22050, 24000, 16000], // V2
	[11025, 12000, 8000],  // V2.5
];

// Samples per frame, indexed by [layer][version index]
pub(crate) const SAMPLES: [[u16; 2]; 3] = [
	[384, 384],   // Layer 1
	[1152, 1152], // Layer 2
	[1152, 576],  // Layer 3
];

// Layer 1/2 intensity stereo, indexed by the mode extension bits
pub(crate) const INTENSITY_BAND_LOWER: [u8; 4] = [4, 8, 12, 16];
pub(crate) const INTENSITY_BAND_UPPER: u8 = 31;

// The frame size numerator, in bytes per (bit/s) per (1/Hz)
//
// NOTE: Applied to every layer. It is only known to hold for Layer 3 (and Layer 2), Layer 1
//       frames are built from 4-byte slots and may not agree with it.
pub(crate) const FRAME_SIZE_COEFFICIENT: u32 = 144;
