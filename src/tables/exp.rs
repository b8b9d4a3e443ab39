/// Exponential curve spanning a 1000:1 ratio: `0xFFFF * 1000^(n / 1023) / 1000`.
pub static EXP1000_U16X1024: [u16; 1024] = [
    0x0042, 0x0042, 0x0042, 0x0043, 0x0043, 0x0044, 0x0044, 0x0045,
    0x0045, 0x0046, 0x0046, 0x0047, 0x0047, 0x0048, 0x0048, 0x0049,
    0x0049, 0x004a, 0x004a, 0x004b, 0x004b, 0x004c, 0x004c, 0x004d,
    0x004d, 0x004e, 0x004e, 0x004f, 0x004f, 0x0050, 0x0050, 0x0051,
    0x0051, 0x0052, 0x0052, 0x0053, 0x0054, 0x0054, 0x0055, 0x0055,
    0x0056, 0x0056, 0x0057, 0x0058, 0x0058, 0x0059, 0x0059, 0x005a,
    0x005b, 0x005b, 0x005c, 0x005c, 0x005d, 0x005e, 0x005e, 0x005f,
    0x0060, 0x0060, 0x0061, 0x0062, 0x0062, 0x0063, 0x0064, 0x0064,
    0x0065, 0x0066, 0x0066, 0x0067, 0x0068, 0x0068, 0x0069, 0x006a,
    0x006b, 0x006b, 0x006c, 0x006d, 0x006d, 0x006e, 0x006f, 0x0070,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0074, 0x0075, 0x0076,
    0x0077, 0x0078, 0x0078, 0x0079, 0x007a, 0x007b, 0x007c, 0x007c,
    0x007d, 0x007e, 0x007f, 0x0080, 0x0081, 0x0082, 0x0082, 0x0083,
    0x0084, 0x0085, 0x0086, 0x0087, 0x0088, 0x0089, 0x008a, 0x008b,
    0x008c, 0x008d, 0x008e, 0x008e, 0x008f, 0x0090, 0x0091, 0x0092,
    0x0093, 0x0094, 0x0095, 0x0096, 0x0097, 0x0098, 0x0099, 0x009a,
    0x009c, 0x009d, 0x009e, 0x009f, 0x00a0, 0x00a1, 0x00a2, 0x00a3,
    0x00a4, 0x00a5, 0x00a6, 0x00a8, 0x00a9, 0x00aa, 0x00ab, 0x00ac,
    0x00ad, 0x00ae, 0x00b0, 0x00b1, 0x00b2, 0x00b3, 0x00b4, 0x00b6,
    0x00b7, 0x00b8, 0x00b9, 0x00bb, 0x00bc, 0x00bd, 0x00be, 0x00c0,
    0x00c1, 0x00c2, 0x00c4, 0x00c5, 0x00c6, 0x00c8, 0x00c9, 0x00ca,
    0x00cc, 0x00cd, 0x00cf, 0x00d0, 0x00d1, 0x00d3, 0x00d4, 0x00d6,
    0x00d7, 0x00d9, 0x00da, 0x00db, 0x00dd, 0x00de, 0x00e0, 0x00e1,
    0x00e3, 0x00e5, 0x00e6, 0x00e8, 0x00e9, 0x00eb, 0x00ec, 0x00ee,
    0x00f0, 0x00f1, 0x00f3, 0x00f5, 0x00f6, 0x00f8, 0x00fa, 0x00fb,
    0x00fd, 0x00ff, 0x0100, 0x0102, 0x0104, 0x0106, 0x0107, 0x0109,
    0x010b, 0x010d, 0x010f, 0x0110, 0x0112, 0x0114, 0x0116, 0x0118,
    0x011a, 0x011c, 0x011e, 0x0120, 0x0121, 0x0123, 0x0125, 0x0127,
    0x0129, 0x012b, 0x012d, 0x0130, 0x0132, 0x0134, 0x0136, 0x0138,
    0x013a, 0x013c, 0x013e, 0x0140, 0x0143, 0x0145, 0x0147, 0x0149,
    0x014b, 0x014e, 0x0150, 0x0152, 0x0154, 0x0157, 0x0159, 0x015b,
    0x015e, 0x0160, 0x0162, 0x0165, 0x0167, 0x016a, 0x016c, 0x016f,
    0x0171, 0x0174, 0x0176, 0x0179, 0x017b, 0x017e, 0x0180, 0x0183,
    0x0186, 0x0188, 0x018b, 0x018e, 0x0190, 0x0193, 0x0196, 0x0199,
    0x019b, 0x019e, 0x01a1, 0x01a4, 0x01a7, 0x01a9, 0x01ac, 0x01af,
    0x01b2, 0x01b5, 0x01b8, 0x01bb, 0x01be, 0x01c1, 0x01c4, 0x01c7,
    0x01ca, 0x01cd, 0x01d0, 0x01d4, 0x01d7, 0x01da, 0x01dd, 0x01e0,
    0x01e4, 0x01e7, 0x01ea, 0x01ee, 0x01f1, 0x01f4, 0x01f8, 0x01fb,
    0x01fe, 0x0202, 0x0205, 0x0209, 0x020c, 0x0210, 0x0214, 0x0217,
    0x021b, 0x021e, 0x0222, 0x0226, 0x022a, 0x022d, 0x0231, 0x0235,
    0x0239, 0x023d, 0x0240, 0x0244, 0x0248, 0x024c, 0x0250, 0x0254,
    0x0258, 0x025c, 0x0260, 0x0265, 0x0269, 0x026d, 0x0271, 0x0275,
    0x027a, 0x027e, 0x0282, 0x0287, 0x028b, 0x028f, 0x0294, 0x0298,
    0x029d, 0x02a1, 0x02a6, 0x02aa, 0x02af, 0x02b4, 0x02b8, 0x02bd,
    0x02c2, 0x02c7, 0x02cb, 0x02d0, 0x02d5, 0x02da, 0x02df, 0x02e4,
    0x02e9, 0x02ee, 0x02f3, 0x02f8, 0x02fd, 0x0303, 0x0308, 0x030d,
    0x0312, 0x0318, 0x031d, 0x0323, 0x0328, 0x032d, 0x0333, 0x0338,
    0x033e, 0x0344, 0x0349, 0x034f, 0x0355, 0x035b, 0x0360, 0x0366,
    0x036c, 0x0372, 0x0378, 0x037e, 0x0384, 0x038a, 0x0390, 0x0397,
    0x039d, 0x03a3, 0x03a9, 0x03b0, 0x03b6, 0x03bd, 0x03c3, 0x03ca,
    0x03d0, 0x03d7, 0x03dd, 0x03e4, 0x03eb, 0x03f2, 0x03f8, 0x03ff,
    0x0406, 0x040d, 0x0414, 0x041b, 0x0422, 0x042a, 0x0431, 0x0438,
    0x043f, 0x0447, 0x044e, 0x0456, 0x045d, 0x0465, 0x046c, 0x0474,
    0x047c, 0x0484, 0x048b, 0x0493, 0x049b, 0x04a3, 0x04ab, 0x04b3,
    0x04bc, 0x04c4, 0x04cc, 0x04d4, 0x04dd, 0x04e5, 0x04ee, 0x04f6,
    0x04ff, 0x0507, 0x0510, 0x0519, 0x0522, 0x052b, 0x0534, 0x053d,
    0x0546, 0x054f, 0x0558, 0x0561, 0x056b, 0x0574, 0x057e, 0x0587,
    0x0591, 0x059a, 0x05a4, 0x05ae, 0x05b8, 0x05c2, 0x05cc, 0x05d6,
    0x05e0, 0x05ea, 0x05f4, 0x05ff, 0x0609, 0x0613, 0x061e, 0x0629,
    0x0633, 0x063e, 0x0649, 0x0654, 0x065f, 0x066a, 0x0675, 0x0680,
    0x068b, 0x0697, 0x06a2, 0x06ae, 0x06b9, 0x06c5, 0x06d1, 0x06dc,
    0x06e8, 0x06f4, 0x0700, 0x070c, 0x0719, 0x0725, 0x0731, 0x073e,
    0x074a, 0x0757, 0x0764, 0x0771, 0x077e, 0x078b, 0x0798, 0x07a5,
    0x07b2, 0x07bf, 0x07cd, 0x07da, 0x07e8, 0x07f6, 0x0804, 0x0811,
    0x081f, 0x082d, 0x083c, 0x084a, 0x0858, 0x0867, 0x0875, 0x0884,
    0x0893, 0x08a2, 0x08b1, 0x08c0, 0x08cf, 0x08de, 0x08ee, 0x08fd,
    0x090d, 0x091c, 0x092c, 0x093c, 0x094c, 0x095c, 0x096c, 0x097d,
    0x098d, 0x099e, 0x09ae, 0x09bf, 0x09d0, 0x09e1, 0x09f2, 0x0a04,
    0x0a15, 0x0a26, 0x0a38, 0x0a4a, 0x0a5c, 0x0a6e, 0x0a80, 0x0a92,
    0x0aa4, 0x0ab7, 0x0ac9, 0x0adc, 0x0aef, 0x0b02, 0x0b15, 0x0b28,
    0x0b3b, 0x0b4f, 0x0b63, 0x0b76, 0x0b8a, 0x0b9e, 0x0bb2, 0x0bc7,
    0x0bdb, 0x0bf0, 0x0c04, 0x0c19, 0x0c2e, 0x0c43, 0x0c59, 0x0c6e,
    0x0c83, 0x0c99, 0x0caf, 0x0cc5, 0x0cdb, 0x0cf1, 0x0d08, 0x0d1f,
    0x0d35, 0x0d4c, 0x0d63, 0x0d7a, 0x0d92, 0x0da9, 0x0dc1, 0x0dd9,
    0x0df1, 0x0e09, 0x0e22, 0x0e3a, 0x0e53, 0x0e6c, 0x0e85, 0x0e9e,
    0x0eb7, 0x0ed1, 0x0eea, 0x0f04, 0x0f1e, 0x0f38, 0x0f53, 0x0f6d,
    0x0f88, 0x0fa3, 0x0fbe, 0x0fda, 0x0ff5, 0x1011, 0x102d, 0x1049,
    0x1065, 0x1081, 0x109e, 0x10bb, 0x10d8, 0x10f5, 0x1112, 0x1130,
    0x114e, 0x116c, 0x118a, 0x11a8, 0x11c7, 0x11e6, 0x1205, 0x1224,
    0x1244, 0x1263, 0x1283, 0x12a3, 0x12c4, 0x12e4, 0x1305, 0x1326,
    0x1347, 0x1369, 0x138a, 0x13ac, 0x13ce, 0x13f1, 0x1413, 0x1436,
    0x1459, 0x147c, 0x14a0, 0x14c4, 0x14e8, 0x150c, 0x1531, 0x1555,
    0x157a, 0x15a0, 0x15c5, 0x15eb, 0x1611, 0x1637, 0x165e, 0x1684,
    0x16ab, 0x16d3, 0x16fa, 0x1722, 0x174a, 0x1773, 0x179b, 0x17c4,
    0x17ee, 0x1817, 0x1841, 0x186b, 0x1895, 0x18c0, 0x18eb, 0x1916,
    0x1942, 0x196d, 0x1999, 0x19c6, 0x19f3, 0x1a20, 0x1a4d, 0x1a7b,
    0x1aa8, 0x1ad7, 0x1b05, 0x1b34, 0x1b63, 0x1b93, 0x1bc3, 0x1bf3,
    0x1c23, 0x1c54, 0x1c85, 0x1cb7, 0x1ce8, 0x1d1b, 0x1d4d, 0x1d80,
    0x1db3, 0x1de7, 0x1e1a, 0x1e4f, 0x1e83, 0x1eb8, 0x1eed, 0x1f23,
    0x1f59, 0x1f8f, 0x1fc6, 0x1ffd, 0x2035, 0x206d, 0x20a5, 0x20de,
    0x2117, 0x2150, 0x218a, 0x21c4, 0x21fe, 0x2239, 0x2275, 0x22b1,
    0x22ed, 0x2329, 0x2366, 0x23a4, 0x23e1, 0x2420, 0x245e, 0x249d,
    0x24dd, 0x251d, 0x255d, 0x259e, 0x25df, 0x2621, 0x2663, 0x26a6,
    0x26e9, 0x272c, 0x2770, 0x27b5, 0x27f9, 0x283f, 0x2885, 0x28cb,
    0x2912, 0x2959, 0x29a1, 0x29e9, 0x2a31, 0x2a7b, 0x2ac4, 0x2b0e,
    0x2b59, 0x2ba4, 0x2bf0, 0x2c3c, 0x2c89, 0x2cd6, 0x2d24, 0x2d72,
    0x2dc1, 0x2e10, 0x2e60, 0x2eb1, 0x2f02, 0x2f53, 0x2fa5, 0x2ff8,
    0x304b, 0x309f, 0x30f3, 0x3148, 0x319e, 0x31f4, 0x324a, 0x32a2,
    0x32f9, 0x3352, 0x33ab, 0x3405, 0x345f, 0x34ba, 0x3515, 0x3571,
    0x35ce, 0x362b, 0x3689, 0x36e8, 0x3747, 0x37a7, 0x3807, 0x3868,
    0x38ca, 0x392d, 0x3990, 0x39f4, 0x3a58, 0x3abe, 0x3b23, 0x3b8a,
    0x3bf1, 0x3c59, 0x3cc2, 0x3d2b, 0x3d95, 0x3e00, 0x3e6c, 0x3ed8,
    0x3f45, 0x3fb3, 0x4021, 0x4090, 0x4100, 0x4171, 0x41e3, 0x4255,
    0x42c8, 0x433c, 0x43b0, 0x4426, 0x449c, 0x4513, 0x458b, 0x4604,
    0x467d, 0x46f7, 0x4772, 0x47ee, 0x486b, 0x48e9, 0x4967, 0x49e6,
    0x4a67, 0x4ae8, 0x4b6a, 0x4bec, 0x4c70, 0x4cf5, 0x4d7a, 0x4e00,
    0x4e88, 0x4f10, 0x4f99, 0x5023, 0x50ae, 0x513a, 0x51c7, 0x5255,
    0x52e4, 0x5373, 0x5404, 0x5496, 0x5529, 0x55bc, 0x5651, 0x56e7,
    0x577d, 0x5815, 0x58ae, 0x5948, 0x59e3, 0x5a7e, 0x5b1b, 0x5bb9,
    0x5c59, 0x5cf9, 0x5d9a, 0x5e3c, 0x5ee0, 0x5f84, 0x602a, 0x60d1,
    0x6179, 0x6222, 0x62cc, 0x6377, 0x6424, 0x64d2, 0x6580, 0x6631,
    0x66e2, 0x6794, 0x6848, 0x68fd, 0x69b3, 0x6a6a, 0x6b23, 0x6bdd,
    0x6c98, 0x6d54, 0x6e12, 0x6ed1, 0x6f91, 0x7052, 0x7115, 0x71d9,
    0x729f, 0x7365, 0x742e, 0x74f7, 0x75c2, 0x768e, 0x775c, 0x782b,
    0x78fb, 0x79cd, 0x7aa0, 0x7b75, 0x7c4b, 0x7d23, 0x7dfc, 0x7ed6,
    0x7fb2, 0x8090, 0x816f, 0x824f, 0x8331, 0x8415, 0x84fa, 0x85e1,
    0x86c9, 0x87b3, 0x889e, 0x898b, 0x8a7a, 0x8b6a, 0x8c5c, 0x8d4f,
    0x8e44, 0x8f3b, 0x9033, 0x912d, 0x9229, 0x9327, 0x9426, 0x9527,
    0x962a, 0x972e, 0x9834, 0x993c, 0x9a46, 0x9b52, 0x9c5f, 0x9d6e,
    0x9e7f, 0x9f92, 0xa0a7, 0xa1be, 0xa2d6, 0xa3f1, 0xa50d, 0xa62b,
    0xa74b, 0xa86e, 0xa992, 0xaab8, 0xabe0, 0xad0a, 0xae36, 0xaf64,
    0xb095, 0xb1c7, 0xb2fb, 0xb432, 0xb56a, 0xb6a5, 0xb7e2, 0xb921,
    0xba62, 0xbba5, 0xbcea, 0xbe32, 0xbf7c, 0xc0c8, 0xc217, 0xc367,
    0xc4ba, 0xc60f, 0xc767, 0xc8c1, 0xca1d, 0xcb7b, 0xccdc, 0xce40,
    0xcfa5, 0xd10e, 0xd278, 0xd3e5, 0xd555, 0xd6c7, 0xd83b, 0xd9b2,
    0xdb2c, 0xdca8, 0xde27, 0xdfa8, 0xe12c, 0xe2b3, 0xe43c, 0xe5c8,
    0xe756, 0xe8e8, 0xea7b, 0xec12, 0xedac, 0xef48, 0xf0e7, 0xf289,
    0xf42d, 0xf5d5, 0xf77f, 0xf92d, 0xfadd, 0xfc90, 0xfe46, 0xffff,
];
