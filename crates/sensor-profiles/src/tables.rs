//! Register tables
//!
//! Vendor-supplied init and mode sequences for a 24 MHz input clock.

use sensor_control::RegVal;

/// OV9734 power-up init
pub static OV9734_GLOBAL: [RegVal; 168] = [
    RegVal::new(0x0103, 0x01),
    RegVal::delay(16),
    RegVal::new(0x0100, 0x00),
    RegVal::delay(16),
    RegVal::new(0x3001, 0x00),
    RegVal::new(0x3002, 0x00),
    RegVal::new(0x3007, 0x00),
    RegVal::new(0x3010, 0x00),
    RegVal::new(0x3011, 0x08),
    RegVal::new(0x3014, 0x22),
    RegVal::new(0x301e, 0x15),
    RegVal::new(0x3030, 0x19),
    RegVal::new(0x3080, 0x02),
    RegVal::new(0x3081, 0x3c),
    RegVal::new(0x3082, 0x04),
    RegVal::new(0x3083, 0x00),
    RegVal::new(0x3084, 0x02),
    RegVal::new(0x3085, 0x01),
    RegVal::new(0x3086, 0x01),
    RegVal::new(0x3089, 0x01),
    RegVal::new(0x308a, 0x00),
    RegVal::new(0x3103, 0x01),
    RegVal::new(0x3600, 0x55),
    RegVal::new(0x3601, 0x02),
    RegVal::new(0x3605, 0x22),
    RegVal::new(0x3611, 0xe7),
    RegVal::new(0x3654, 0x10),
    RegVal::new(0x3655, 0x77),
    RegVal::new(0x3656, 0x77),
    RegVal::new(0x3657, 0x07),
    RegVal::new(0x3658, 0x22),
    RegVal::new(0x3659, 0x22),
    RegVal::new(0x365a, 0x02),
    RegVal::new(0x3784, 0x05),
    RegVal::new(0x3785, 0x55),
    RegVal::new(0x37c0, 0x07),
    RegVal::new(0x3800, 0x00),
    RegVal::new(0x3801, 0x04),
    RegVal::new(0x3802, 0x00),
    RegVal::new(0x3803, 0x04),
    RegVal::new(0x3804, 0x05),
    RegVal::new(0x3805, 0x0b),
    RegVal::new(0x3806, 0x02),
    RegVal::new(0x3807, 0xdb),
    RegVal::new(0x3808, 0x05),
    RegVal::new(0x3809, 0x00),
    RegVal::new(0x380a, 0x02),
    RegVal::new(0x380b, 0xd0),
    RegVal::new(0x380c, 0x05),
    RegVal::new(0x380d, 0xc6),
    RegVal::new(0x380e, 0x03),
    RegVal::new(0x380f, 0x22),
    RegVal::new(0x3810, 0x00),
    RegVal::new(0x3811, 0x04),
    RegVal::new(0x3812, 0x00),
    RegVal::new(0x3813, 0x04),
    RegVal::new(0x3816, 0x00),
    RegVal::new(0x3817, 0x00),
    RegVal::new(0x3818, 0x00),
    RegVal::new(0x3819, 0x04),
    RegVal::new(0x3820, 0x18),
    RegVal::new(0x3821, 0x00),
    RegVal::new(0x382c, 0x06),
    RegVal::new(0x3500, 0x00),
    RegVal::new(0x3501, 0x31),
    RegVal::new(0x3502, 0x00),
    RegVal::new(0x3503, 0x03),
    RegVal::new(0x3504, 0x00),
    RegVal::new(0x3505, 0x00),
    RegVal::new(0x3509, 0x10),
    RegVal::new(0x350a, 0x00),
    RegVal::new(0x350b, 0x40),
    RegVal::new(0x3d00, 0x00),
    RegVal::new(0x3d01, 0x00),
    RegVal::new(0x3d02, 0x00),
    RegVal::new(0x3d03, 0x00),
    RegVal::new(0x3d04, 0x00),
    RegVal::new(0x3d05, 0x00),
    RegVal::new(0x3d06, 0x00),
    RegVal::new(0x3d07, 0x00),
    RegVal::new(0x3d08, 0x00),
    RegVal::new(0x3d09, 0x00),
    RegVal::new(0x3d0a, 0x00),
    RegVal::new(0x3d0b, 0x00),
    RegVal::new(0x3d0c, 0x00),
    RegVal::new(0x3d0d, 0x00),
    RegVal::new(0x3d0e, 0x00),
    RegVal::new(0x3d0f, 0x00),
    RegVal::new(0x3d80, 0x00),
    RegVal::new(0x3d81, 0x00),
    RegVal::new(0x3d82, 0x38),
    RegVal::new(0x3d83, 0xa4),
    RegVal::new(0x3d84, 0x00),
    RegVal::new(0x3d85, 0x00),
    RegVal::new(0x3d86, 0x1f),
    RegVal::new(0x3d87, 0x03),
    RegVal::new(0x3d8b, 0x00),
    RegVal::new(0x3d8f, 0x00),
    RegVal::new(0x4001, 0xe0),
    RegVal::new(0x4009, 0x0b),
    RegVal::new(0x4300, 0x03),
    RegVal::new(0x4301, 0xff),
    RegVal::new(0x4304, 0x00),
    RegVal::new(0x4305, 0x00),
    RegVal::new(0x4309, 0x00),
    RegVal::new(0x4600, 0x00),
    RegVal::new(0x4601, 0x80),
    RegVal::new(0x4800, 0x00),
    RegVal::new(0x4805, 0x00),
    RegVal::new(0x4821, 0x50),
    RegVal::new(0x4823, 0x50),
    RegVal::new(0x4837, 0x2d),
    RegVal::new(0x4a00, 0x00),
    RegVal::new(0x4f00, 0x80),
    RegVal::new(0x4f01, 0x10),
    RegVal::new(0x4f02, 0x00),
    RegVal::new(0x4f03, 0x00),
    RegVal::new(0x4f04, 0x00),
    RegVal::new(0x4f05, 0x00),
    RegVal::new(0x4f06, 0x00),
    RegVal::new(0x4f07, 0x00),
    RegVal::new(0x4f08, 0x00),
    RegVal::new(0x4f09, 0x00),
    RegVal::new(0x5000, 0x2f),
    RegVal::new(0x500c, 0x00),
    RegVal::new(0x500d, 0x00),
    RegVal::new(0x500e, 0x00),
    RegVal::new(0x500f, 0x00),
    RegVal::new(0x5010, 0x00),
    RegVal::new(0x5011, 0x00),
    RegVal::new(0x5012, 0x00),
    RegVal::new(0x5013, 0x00),
    RegVal::new(0x5014, 0x00),
    RegVal::new(0x5015, 0x00),
    RegVal::new(0x5016, 0x00),
    RegVal::new(0x5017, 0x00),
    RegVal::new(0x5080, 0x00),
    RegVal::new(0x5180, 0x01),
    RegVal::new(0x5181, 0x00),
    RegVal::new(0x5182, 0x01),
    RegVal::new(0x5183, 0x00),
    RegVal::new(0x5184, 0x01),
    RegVal::new(0x5185, 0x00),
    RegVal::new(0x5708, 0x06),
    RegVal::new(0x380f, 0x2a),
    RegVal::new(0x5780, 0x3e),
    RegVal::new(0x5781, 0x0f),
    RegVal::new(0x5782, 0x44),
    RegVal::new(0x5783, 0x02),
    RegVal::new(0x5784, 0x01),
    RegVal::new(0x5785, 0x01),
    RegVal::new(0x5786, 0x00),
    RegVal::new(0x5787, 0x04),
    RegVal::new(0x5788, 0x02),
    RegVal::new(0x5789, 0x0f),
    RegVal::new(0x578a, 0xfd),
    RegVal::new(0x578b, 0xf5),
    RegVal::new(0x578c, 0xf5),
    RegVal::new(0x578d, 0x03),
    RegVal::new(0x578e, 0x08),
    RegVal::new(0x578f, 0x0c),
    RegVal::new(0x5790, 0x08),
    RegVal::new(0x5791, 0x04),
    RegVal::new(0x5792, 0x00),
    RegVal::new(0x5793, 0x52),
    RegVal::new(0x5794, 0xa3),
    RegVal::new(0x5000, 0x3f),
    RegVal::END,
];

/// OV9734 1280x720; the init sequence already configures this mode
pub static OV9734_1280X720: [RegVal; 1] = [RegVal::END];

/// GC05A2 power-up init
pub static GC05A2_GLOBAL: [RegVal; 325] = [
    RegVal::new(0x0315, 0xd4),
    RegVal::new(0x0d06, 0x01),
    RegVal::new(0x0a70, 0x80),
    RegVal::new(0x031a, 0x00),
    RegVal::new(0x0314, 0x00),
    RegVal::new(0x0130, 0x08),
    RegVal::new(0x0132, 0x01),
    RegVal::new(0x0135, 0x01),
    RegVal::new(0x0136, 0x38),
    RegVal::new(0x0137, 0x03),
    RegVal::new(0x0134, 0x5b),
    RegVal::new(0x031c, 0xe0),
    RegVal::new(0x0d82, 0x14),
    RegVal::new(0x0dd1, 0x56),
    RegVal::new(0x0af4, 0x01),
    RegVal::new(0x0002, 0x10),
    RegVal::new(0x00c3, 0x34),
    RegVal::new(0x0084, 0x21),
    RegVal::new(0x0d05, 0xcc),
    RegVal::new(0x0218, 0x00),
    RegVal::new(0x005e, 0x48),
    RegVal::new(0x0d06, 0x01),
    RegVal::new(0x0007, 0x16),
    RegVal::new(0x0101, 0x00),
    RegVal::new(0x0342, 0x07),
    RegVal::new(0x0343, 0x28),
    RegVal::new(0x0220, 0x07),
    RegVal::new(0x0221, 0xd0),
    RegVal::new(0x0202, 0x07),
    RegVal::new(0x0203, 0x32),
    RegVal::new(0x0340, 0x07),
    RegVal::new(0x0341, 0xf0),
    RegVal::new(0x0219, 0x00),
    RegVal::new(0x0346, 0x00),
    RegVal::new(0x0347, 0x04),
    RegVal::new(0x0d14, 0x00),
    RegVal::new(0x0d13, 0x05),
    RegVal::new(0x0d16, 0x05),
    RegVal::new(0x0d15, 0x1d),
    RegVal::new(0x00c0, 0x0a),
    RegVal::new(0x00c1, 0x30),
    RegVal::new(0x034a, 0x07),
    RegVal::new(0x034b, 0xa8),
    RegVal::new(0x0e0a, 0x00),
    RegVal::new(0x0e0b, 0x00),
    RegVal::new(0x0e0e, 0x03),
    RegVal::new(0x0e0f, 0x00),
    RegVal::new(0x0e06, 0x0a),
    RegVal::new(0x0e23, 0x15),
    RegVal::new(0x0e24, 0x15),
    RegVal::new(0x0e2a, 0x10),
    RegVal::new(0x0e2b, 0x10),
    RegVal::new(0x0e17, 0x49),
    RegVal::new(0x0e1b, 0x1c),
    RegVal::new(0x0e3a, 0x36),
    RegVal::new(0x0d11, 0x84),
    RegVal::new(0x0e52, 0x14),
    RegVal::new(0x000b, 0x10),
    RegVal::new(0x0008, 0x08),
    RegVal::new(0x0223, 0x17),
    RegVal::new(0x0d27, 0x39),
    RegVal::new(0x0d22, 0x00),
    RegVal::new(0x03f6, 0x0d),
    RegVal::new(0x0d04, 0x07),
    RegVal::new(0x03f3, 0x72),
    RegVal::new(0x03f4, 0xb8),
    RegVal::new(0x03f5, 0xbc),
    RegVal::new(0x0d02, 0x73),
    RegVal::new(0x00c4, 0x00),
    RegVal::new(0x00c5, 0x01),
    RegVal::new(0x0af6, 0x00),
    RegVal::new(0x0ba0, 0x17),
    RegVal::new(0x0ba1, 0x00),
    RegVal::new(0x0ba2, 0x00),
    RegVal::new(0x0ba3, 0x00),
    RegVal::new(0x0ba4, 0x03),
    RegVal::new(0x0ba5, 0x00),
    RegVal::new(0x0ba6, 0x00),
    RegVal::new(0x0ba7, 0x00),
    RegVal::new(0x0ba8, 0x40),
    RegVal::new(0x0ba9, 0x00),
    RegVal::new(0x0baa, 0x00),
    RegVal::new(0x0bab, 0x00),
    RegVal::new(0x0bac, 0x40),
    RegVal::new(0x0bad, 0x00),
    RegVal::new(0x0bae, 0x00),
    RegVal::new(0x0baf, 0x00),
    RegVal::new(0x0bb0, 0x02),
    RegVal::new(0x0bb1, 0x00),
    RegVal::new(0x0bb2, 0x00),
    RegVal::new(0x0bb3, 0x00),
    RegVal::new(0x0bb8, 0x02),
    RegVal::new(0x0bb9, 0x00),
    RegVal::new(0x0bba, 0x00),
    RegVal::new(0x0bbb, 0x00),
    RegVal::new(0x0a70, 0x80),
    RegVal::new(0x0a71, 0x00),
    RegVal::new(0x0a72, 0x00),
    RegVal::new(0x0a66, 0x00),
    RegVal::new(0x0a67, 0x80),
    RegVal::new(0x0a4d, 0x4e),
    RegVal::new(0x0a50, 0x00),
    RegVal::new(0x0a4f, 0x0c),
    RegVal::new(0x0a66, 0x00),
    RegVal::new(0x00ca, 0x00),
    RegVal::new(0x00cb, 0x00),
    RegVal::new(0x00cc, 0x00),
    RegVal::new(0x00cd, 0x00),
    RegVal::new(0x0aa1, 0x00),
    RegVal::new(0x0aa2, 0xe0),
    RegVal::new(0x0aa3, 0x00),
    RegVal::new(0x0aa4, 0x40),
    RegVal::new(0x0a90, 0x03),
    RegVal::new(0x0a91, 0x0e),
    RegVal::new(0x0a94, 0x80),
    RegVal::new(0x0af6, 0x20),
    RegVal::new(0x0b00, 0x91),
    RegVal::new(0x0b01, 0x17),
    RegVal::new(0x0b02, 0x01),
    RegVal::new(0x0b03, 0x00),
    RegVal::new(0x0b04, 0x01),
    RegVal::new(0x0b05, 0x17),
    RegVal::new(0x0b06, 0x01),
    RegVal::new(0x0b07, 0x00),
    RegVal::new(0x0ae9, 0x01),
    RegVal::new(0x0aea, 0x02),
    RegVal::new(0x0ae8, 0x53),
    RegVal::new(0x0ae8, 0x43),
    RegVal::new(0x0af6, 0x30),
    RegVal::new(0x0b00, 0x08),
    RegVal::new(0x0b01, 0x0f),
    RegVal::new(0x0b02, 0x00),
    RegVal::new(0x0b04, 0x1c),
    RegVal::new(0x0b05, 0x24),
    RegVal::new(0x0b06, 0x00),
    RegVal::new(0x0b08, 0x30),
    RegVal::new(0x0b09, 0x40),
    RegVal::new(0x0b0a, 0x00),
    RegVal::new(0x0b0c, 0x0e),
    RegVal::new(0x0b0d, 0x2a),
    RegVal::new(0x0b0e, 0x00),
    RegVal::new(0x0b10, 0x0e),
    RegVal::new(0x0b11, 0x2b),
    RegVal::new(0x0b12, 0x00),
    RegVal::new(0x0b14, 0x0e),
    RegVal::new(0x0b15, 0x23),
    RegVal::new(0x0b16, 0x00),
    RegVal::new(0x0b18, 0x0e),
    RegVal::new(0x0b19, 0x24),
    RegVal::new(0x0b1a, 0x00),
    RegVal::new(0x0b1c, 0x0c),
    RegVal::new(0x0b1d, 0x0c),
    RegVal::new(0x0b1e, 0x00),
    RegVal::new(0x0b20, 0x03),
    RegVal::new(0x0b21, 0x03),
    RegVal::new(0x0b22, 0x00),
    RegVal::new(0x0b24, 0x0e),
    RegVal::new(0x0b25, 0x0e),
    RegVal::new(0x0b26, 0x00),
    RegVal::new(0x0b28, 0x03),
    RegVal::new(0x0b29, 0x03),
    RegVal::new(0x0b2a, 0x00),
    RegVal::new(0x0b2c, 0x12),
    RegVal::new(0x0b2d, 0x12),
    RegVal::new(0x0b2e, 0x00),
    RegVal::new(0x0b30, 0x08),
    RegVal::new(0x0b31, 0x08),
    RegVal::new(0x0b32, 0x00),
    RegVal::new(0x0b34, 0x14),
    RegVal::new(0x0b35, 0x14),
    RegVal::new(0x0b36, 0x00),
    RegVal::new(0x0b38, 0x10),
    RegVal::new(0x0b39, 0x10),
    RegVal::new(0x0b3a, 0x00),
    RegVal::new(0x0b3c, 0x16),
    RegVal::new(0x0b3d, 0x16),
    RegVal::new(0x0b3e, 0x00),
    RegVal::new(0x0b40, 0x10),
    RegVal::new(0x0b41, 0x10),
    RegVal::new(0x0b42, 0x00),
    RegVal::new(0x0b44, 0x19),
    RegVal::new(0x0b45, 0x19),
    RegVal::new(0x0b46, 0x00),
    RegVal::new(0x0b48, 0x16),
    RegVal::new(0x0b49, 0x16),
    RegVal::new(0x0b4a, 0x00),
    RegVal::new(0x0b4c, 0x19),
    RegVal::new(0x0b4d, 0x19),
    RegVal::new(0x0b4e, 0x00),
    RegVal::new(0x0b50, 0x16),
    RegVal::new(0x0b51, 0x16),
    RegVal::new(0x0b52, 0x00),
    RegVal::new(0x0b80, 0x01),
    RegVal::new(0x0b81, 0x00),
    RegVal::new(0x0b82, 0x00),
    RegVal::new(0x0b84, 0x00),
    RegVal::new(0x0b85, 0x00),
    RegVal::new(0x0b86, 0x00),
    RegVal::new(0x0b88, 0x01),
    RegVal::new(0x0b89, 0x6a),
    RegVal::new(0x0b8a, 0x00),
    RegVal::new(0x0b8c, 0x00),
    RegVal::new(0x0b8d, 0x01),
    RegVal::new(0x0b8e, 0x00),
    RegVal::new(0x0b90, 0x01),
    RegVal::new(0x0b91, 0xf6),
    RegVal::new(0x0b92, 0x00),
    RegVal::new(0x0b94, 0x00),
    RegVal::new(0x0b95, 0x02),
    RegVal::new(0x0b96, 0x00),
    RegVal::new(0x0b98, 0x02),
    RegVal::new(0x0b99, 0xc4),
    RegVal::new(0x0b9a, 0x00),
    RegVal::new(0x0b9c, 0x00),
    RegVal::new(0x0b9d, 0x03),
    RegVal::new(0x0b9e, 0x00),
    RegVal::new(0x0ba0, 0x03),
    RegVal::new(0x0ba1, 0xd8),
    RegVal::new(0x0ba2, 0x00),
    RegVal::new(0x0ba4, 0x00),
    RegVal::new(0x0ba5, 0x04),
    RegVal::new(0x0ba6, 0x00),
    RegVal::new(0x0ba8, 0x05),
    RegVal::new(0x0ba9, 0x4d),
    RegVal::new(0x0baa, 0x00),
    RegVal::new(0x0bac, 0x00),
    RegVal::new(0x0bad, 0x05),
    RegVal::new(0x0bae, 0x00),
    RegVal::new(0x0bb0, 0x07),
    RegVal::new(0x0bb1, 0x3e),
    RegVal::new(0x0bb2, 0x00),
    RegVal::new(0x0bb4, 0x00),
    RegVal::new(0x0bb5, 0x06),
    RegVal::new(0x0bb6, 0x00),
    RegVal::new(0x0bb8, 0x0a),
    RegVal::new(0x0bb9, 0x1a),
    RegVal::new(0x0bba, 0x00),
    RegVal::new(0x0bbc, 0x09),
    RegVal::new(0x0bbd, 0x36),
    RegVal::new(0x0bbe, 0x00),
    RegVal::new(0x0bc0, 0x0e),
    RegVal::new(0x0bc1, 0x66),
    RegVal::new(0x0bc2, 0x00),
    RegVal::new(0x0bc4, 0x10),
    RegVal::new(0x0bc5, 0x06),
    RegVal::new(0x0bc6, 0x00),
    RegVal::new(0x02c1, 0xe0),
    RegVal::new(0x0207, 0x04),
    RegVal::new(0x02c2, 0x10),
    RegVal::new(0x02c3, 0x74),
    RegVal::new(0x02c5, 0x09),
    RegVal::new(0x0aa1, 0x15),
    RegVal::new(0x0aa2, 0x50),
    RegVal::new(0x0aa3, 0x00),
    RegVal::new(0x0aa4, 0x09),
    RegVal::new(0x0a90, 0x25),
    RegVal::new(0x0a91, 0x0e),
    RegVal::new(0x0a94, 0x80),
    RegVal::new(0x0050, 0x00),
    RegVal::new(0x0089, 0x83),
    RegVal::new(0x005a, 0x40),
    RegVal::new(0x00c3, 0x35),
    RegVal::new(0x00c4, 0x80),
    RegVal::new(0x0080, 0x10),
    RegVal::new(0x0040, 0x12),
    RegVal::new(0x0053, 0x0a),
    RegVal::new(0x0054, 0x44),
    RegVal::new(0x0055, 0x32),
    RegVal::new(0x004a, 0x03),
    RegVal::new(0x0048, 0xf0),
    RegVal::new(0x0049, 0x0f),
    RegVal::new(0x0041, 0x20),
    RegVal::new(0x0043, 0x0a),
    RegVal::new(0x009d, 0x08),
    RegVal::new(0x0204, 0x04),
    RegVal::new(0x0205, 0x00),
    RegVal::new(0x02b3, 0x00),
    RegVal::new(0x02b4, 0x00),
    RegVal::new(0x009e, 0x01),
    RegVal::new(0x009f, 0x94),
    RegVal::new(0x0350, 0x01),
    RegVal::new(0x0353, 0x00),
    RegVal::new(0x0354, 0x08),
    RegVal::new(0x034c, 0x0a),
    RegVal::new(0x034d, 0x20),
    RegVal::new(0x021f, 0x14),
    RegVal::new(0x0aa1, 0x10),
    RegVal::new(0x0aa2, 0xf8),
    RegVal::new(0x0aa3, 0x00),
    RegVal::new(0x0aa4, 0x0a),
    RegVal::new(0x0a90, 0x11),
    RegVal::new(0x0a91, 0x0e),
    RegVal::new(0x0a94, 0x80),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x0a94, 0x00),
    RegVal::new(0x0a70, 0x00),
    RegVal::new(0x0a67, 0x00),
    RegVal::new(0x0af4, 0x29),
    RegVal::new(0x0d80, 0x07),
    RegVal::new(0x0dd0, 0x00),
    RegVal::new(0x0dd1, 0x12),
    RegVal::new(0x0dd3, 0x20),
    RegVal::new(0x0107, 0x05),
    RegVal::new(0x0117, 0x01),
    RegVal::new(0x0d81, 0x00),
    RegVal::new(0x031c, 0x80),
    RegVal::new(0x03fe, 0x30),
    RegVal::new(0x0d17, 0x06),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x0d17, 0x00),
    RegVal::new(0x031c, 0x93),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x031c, 0x80),
    RegVal::new(0x03fe, 0x30),
    RegVal::new(0x0d17, 0x06),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x0d17, 0x00),
    RegVal::new(0x031c, 0x93),
    RegVal::END,
];

/// GC05A2 2592x1944 at 30 fps over two lanes
pub static GC05A2_2592X1944: [RegVal; 91] = [
    RegVal::new(0x0315, 0xd4),
    RegVal::new(0x0d06, 0x01),
    RegVal::new(0x0a70, 0x80),
    RegVal::new(0x031a, 0x00),
    RegVal::new(0x0314, 0x00),
    RegVal::new(0x0130, 0x08),
    RegVal::new(0x0132, 0x01),
    RegVal::new(0x0135, 0x01),
    RegVal::new(0x0136, 0x38),
    RegVal::new(0x0137, 0x03),
    RegVal::new(0x0134, 0x5b),
    RegVal::new(0x031c, 0xe0),
    RegVal::new(0x0d82, 0x14),
    RegVal::new(0x0dd1, 0x56),
    RegVal::new(0x0af4, 0x01),
    RegVal::new(0x0002, 0x10),
    RegVal::new(0x00c3, 0x34),
    RegVal::new(0x0084, 0x21),
    RegVal::new(0x0d05, 0xcc),
    RegVal::new(0x0218, 0x00),
    RegVal::new(0x005e, 0x48),
    RegVal::new(0x0d06, 0x01),
    RegVal::new(0x0007, 0x16),
    RegVal::new(0x0342, 0x07),
    RegVal::new(0x0343, 0x28),
    RegVal::new(0x0220, 0x07),
    RegVal::new(0x0221, 0xd0),
    RegVal::new(0x0202, 0x07),
    RegVal::new(0x0203, 0xf0),
    RegVal::new(0x0340, 0x07),
    RegVal::new(0x0341, 0xf0),
    RegVal::new(0x0346, 0x00),
    RegVal::new(0x0347, 0x04),
    RegVal::new(0x0d14, 0x00),
    RegVal::new(0x0d13, 0x05),
    RegVal::new(0x0d16, 0x05),
    RegVal::new(0x0d15, 0x1d),
    RegVal::new(0x00c0, 0x0a),
    RegVal::new(0x00c1, 0x30),
    RegVal::new(0x034a, 0x07),
    RegVal::new(0x034b, 0xa8),
    RegVal::new(0x000b, 0x10),
    RegVal::new(0x0008, 0x08),
    RegVal::new(0x0223, 0x17),
    RegVal::new(0x00ca, 0x00),
    RegVal::new(0x00cb, 0x00),
    RegVal::new(0x00cc, 0x00),
    RegVal::new(0x00cd, 0x00),
    RegVal::new(0x00c3, 0x35),
    RegVal::new(0x0053, 0x0a),
    RegVal::new(0x0054, 0x44),
    RegVal::new(0x0055, 0x32),
    RegVal::new(0x0350, 0x01),
    RegVal::new(0x0353, 0x00),
    RegVal::new(0x0354, 0x08),
    RegVal::new(0x034c, 0x0a),
    RegVal::new(0x034d, 0x20),
    RegVal::new(0x021f, 0x14),
    RegVal::new(0x0d84, 0x0c),
    RegVal::new(0x0d85, 0xa8),
    RegVal::new(0x0d86, 0x06),
    RegVal::new(0x0d87, 0x55),
    RegVal::new(0x0db3, 0x06),
    RegVal::new(0x0db4, 0x08),
    RegVal::new(0x0db5, 0x1e),
    RegVal::new(0x0db6, 0x02),
    RegVal::new(0x0db8, 0x12),
    RegVal::new(0x0db9, 0x0a),
    RegVal::new(0x0d93, 0x06),
    RegVal::new(0x0d94, 0x09),
    RegVal::new(0x0d95, 0x0d),
    RegVal::new(0x0d99, 0x0b),
    RegVal::new(0x0084, 0x01),
    RegVal::new(0x031c, 0x80),
    RegVal::new(0x03fe, 0x30),
    RegVal::new(0x0d17, 0x06),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x0d17, 0x00),
    RegVal::new(0x031c, 0x93),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x031c, 0x80),
    RegVal::new(0x03fe, 0x30),
    RegVal::new(0x0d17, 0x06),
    RegVal::new(0x03fe, 0x00),
    RegVal::new(0x0d17, 0x00),
    RegVal::new(0x031c, 0x93),
    RegVal::new(0x0110, 0x01),
    RegVal::END,
];
