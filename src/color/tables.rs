// Generated lookup tables for the sRGB8 codec.

/// Bit patterns of the linear `f32` value for each sRGB8 code.
pub(super) const SRGB8_TO_LINEAR_BITS: [u32; 256] = [
    0x0000_0000, 0x399f_22b4, 0x3a1f_22b4, 0x3a6e_b40f, 0x3a9f_22b4, 0x3ac6_eb61,
    0x3aee_b40f, 0x3b0b_3e5e, 0x3b1f_22b4, 0x3b33_070b, 0x3b46_eb61, 0x3b5b_518d,
    0x3b70_f18d, 0x3b83_e1c6, 0x3b8f_e616, 0x3b9c_87fd, 0x3ba9_c9b7, 0x3bb7_ad6f,
    0x3bc6_3549, 0x3bd5_6361, 0x3be5_39c1, 0x3bf5_ba70, 0x3c03_73b5, 0x3c0c_6152,
    0x3c15_a703, 0x3c1f_45be, 0x3c29_3e6b, 0x3c33_91f7, 0x3c3e_4149, 0x3c49_4d43,
    0x3c54_b6c7, 0x3c60_7eb1, 0x3c6c_a5df, 0x3c79_2d22, 0x3c83_0aa8, 0x3c89_af9f,
    0x3c90_85db, 0x3c97_8dc5, 0x3c9e_c7c2, 0x3ca6_3433, 0x3cad_d37d, 0x3cb5_a601,
    0x3cbd_ac20, 0x3cc5_e639, 0x3cce_54ab, 0x3cd6_f7d5, 0x3cdf_d010, 0x3ce8_ddb9,
    0x3cf2_2131, 0x3cfb_9ac6, 0x3d02_a56c, 0x3d07_98df, 0x3d0c_a7e7, 0x3d11_d2b2,
    0x3d17_1965, 0x3d1c_7c31, 0x3d21_fb3f, 0x3d27_96b5, 0x3d2d_4ebe, 0x3d33_2384,
    0x3d39_152e, 0x3d3f_23e6, 0x3d45_4fd4, 0x3d4b_991f, 0x3d51_ffef, 0x3d58_846a,
    0x3d5f_26b7, 0x3d65_e6fe, 0x3d6c_c564, 0x3d73_c20f, 0x3d7a_dd29, 0x3d81_0b67,
    0x3d84_b795, 0x3d88_7330, 0x3d8c_3e4a, 0x3d90_18f6, 0x3d94_0345, 0x3d97_fd4a,
    0x3d9c_0716, 0x3da0_20bb, 0x3da4_4a4b, 0x3da8_83d7, 0x3dac_cd70, 0x3db1_2728,
    0x3db5_9112, 0x3dba_0b3b, 0x3dbe_95b5, 0x3dc3_3092, 0x3dc7_dbe2, 0x3dcc_97b6,
    0x3dd1_641f, 0x3dd6_412c, 0x3ddb_2eef, 0x3de0_2d77, 0x3de5_3cd5, 0x3dea_5d19,
    0x3def_8e55, 0x3df4_d093, 0x3dfa_23ea, 0x3dff_8864, 0x3e02_7f09, 0x3e05_4282,
    0x3e08_0ea5, 0x3e0a_e379, 0x3e0d_c107, 0x3e10_a755, 0x3e13_966c, 0x3e16_8e53,
    0x3e19_8f11, 0x3e1c_98ae, 0x3e1f_ab32, 0x3e22_c6a3, 0x3e25_eb0b, 0x3e29_186d,
    0x3e2c_4ed4, 0x3e2f_8e45, 0x3e32_d6c8, 0x3e36_2865, 0x3e39_8322, 0x3e3c_e706,
    0x3e40_5419, 0x3e43_ca62, 0x3e47_49e8, 0x3e4a_d2b1, 0x3e4e_64c6, 0x3e52_002b,
    0x3e55_a4e9, 0x3e59_5307, 0x3e5d_0a8b, 0x3e60_cb7c, 0x3e64_95e0, 0x3e68_69bf,
    0x3e6c_4720, 0x3e70_2e0c, 0x3e74_1e84, 0x3e78_1890, 0x3e7c_1c38, 0x3e80_14c2,
    0x3e82_203c, 0x3e84_308d, 0x3e86_45ba, 0x3e88_5fc5, 0x3e8a_7eb2, 0x3e8c_a283,
    0x3e8e_cb3d, 0x3e90_f8e1, 0x3e93_2b74, 0x3e95_62f8, 0x3e97_9f71, 0x3e99_e0e2,
    0x3e9c_274e, 0x3e9e_72b7, 0x3ea0_c322, 0x3ea3_1892, 0x3ea5_7308, 0x3ea7_d289,
    0x3eaa_3718, 0x3eac_a0b7, 0x3eaf_0f69, 0x3eb1_8333, 0x3eb3_fc18, 0x3eb6_7a18,
    0x3eb8_fd37, 0x3ebb_8579, 0x3ebe_12e1, 0x3ec0_a571, 0x3ec3_3d2d, 0x3ec5_da17,
    0x3ec8_7c33, 0x3ecb_2383, 0x3ecd_d00b, 0x3ed0_81cd, 0x3ed3_38cc, 0x3ed5_f50b,
    0x3ed8_b68d, 0x3edb_7d54, 0x3ede_4965, 0x3ee1_1ac1, 0x3ee3_f16b, 0x3ee6_cd67,
    0x3ee9_aeb6, 0x3eec_955d, 0x3eef_815d, 0x3ef2_72ba, 0x3ef5_6976, 0x3ef8_6594,
    0x3efb_6717, 0x3efe_6e02, 0x3f00_bd2d, 0x3f02_460e, 0x3f03_d1a7, 0x3f05_5ff9,
    0x3f06_f108, 0x3f08_84d1, 0x3f0a_1b57, 0x3f0b_b49d, 0x3f0d_50a2, 0x3f0e_ef69,
    0x3f10_90f2, 0x3f12_3540, 0x3f13_dc53, 0x3f15_862d, 0x3f17_32cf, 0x3f18_e23b,
    0x3f1a_9471, 0x3f1c_4973, 0x3f1e_0143, 0x3f1f_bbe1, 0x3f21_7950, 0x3f23_398f,
    0x3f24_fca2, 0x3f26_c288, 0x3f28_8b43, 0x3f2a_56d5, 0x3f2c_253f, 0x3f2d_f681,
    0x3f2f_ca9e, 0x3f31_a199, 0x3f33_7b6e, 0x3f35_5822, 0x3f37_37b5, 0x3f39_1a28,
    0x3f3a_ff7e, 0x3f3c_e7b7, 0x3f3e_d2d4, 0x3f40_c0d6, 0x3f42_b1c0, 0x3f44_a592,
    0x3f46_9c4d, 0x3f48_95f3, 0x3f4a_9284, 0x3f4c_9203, 0x3f4e_9470, 0x3f50_99cd,
    0x3f52_a21a, 0x3f54_ad59, 0x3f56_bb8c, 0x3f58_ccb3, 0x3f5a_e0cf, 0x3f5c_f7e2,
    0x3f5f_11ee, 0x3f61_2ef2, 0x3f63_4eef, 0x3f65_71ec, 0x3f67_97e3, 0x3f69_c0db,
    0x3f6b_eccd, 0x3f6e_1bc4, 0x3f70_4db8, 0x3f72_82b4, 0x3f74_baae, 0x3f76_f5b3,
    0x3f79_33b9, 0x3f7b_74cb, 0x3f7d_b8e0, 0x3f80_0000,
];

/// Piecewise-linear encode segments: 13 exponents (2^-13 .. 2^-1), 8 mantissa buckets each.
///
/// High 16 bits hold the bias (scaled by 1/512), low 16 bits the slope.
pub(super) const LINEAR_TO_SRGB8_SEGMENTS: [u32; 104] = [
    0x0073_000d, 0x007a_000d, 0x0080_000d, 0x0087_000d, 0x008d_000d, 0x0094_000d,
    0x009a_000d, 0x00a1_000d, 0x00a7_001a, 0x00b4_001a, 0x00c1_001a, 0x00ce_001a,
    0x00da_001a, 0x00e7_001a, 0x00f4_001a, 0x0101_001a, 0x010e_0033, 0x0128_0033,
    0x0141_0033, 0x015b_0033, 0x0175_0033, 0x018f_0033, 0x01a8_0033, 0x01c2_0033,
    0x01dc_0067, 0x020f_0067, 0x0243_0067, 0x0276_0067, 0x02aa_0067, 0x02dd_0067,
    0x0311_0067, 0x0344_0067, 0x0378_00ce, 0x03df_00ce, 0x0446_00ce, 0x04ad_00ce,
    0x0514_00ce, 0x057b_00c5, 0x05dd_00bc, 0x063b_00b5, 0x0697_0158, 0x0742_0142,
    0x07e3_0130, 0x087b_0120, 0x090b_0112, 0x0994_0106, 0x0a17_00fc, 0x0a95_00f2,
    0x0b0f_01cb, 0x0bf4_01ae, 0x0ccb_0195, 0x0d95_0180, 0x0e56_016e, 0x0f0d_015e,
    0x0fbc_0150, 0x1063_0143, 0x1107_0264, 0x1238_023e, 0x1357_021d, 0x1466_0201,
    0x1566_01e9, 0x165a_01d3, 0x1744_01c0, 0x1824_01af, 0x18fe_0331, 0x1a96_02fe,
    0x1c15_02d2, 0x1d7e_02ad, 0x1ed4_028d, 0x201a_0270, 0x2152_0256, 0x227d_0240,
    0x239f_0443, 0x25c0_03fe, 0x27bf_03c4, 0x29a1_0392, 0x2b6a_0367, 0x2d1d_0341,
    0x2ebe_031f, 0x304d_0300, 0x31d1_05b0, 0x34a8_0555, 0x3752_0507, 0x39d5_04c5,
    0x3c37_048b, 0x3e7c_0458, 0x40a8_042a, 0x42bd_0401, 0x44c2_0798, 0x488e_071e,
    0x4c1c_06b6, 0x4f76_065d, 0x52a5_0610, 0x55ac_05cc, 0x5892_058f, 0x5b59_0559,
    0x5e0c_0a23, 0x631c_0980, 0x67db_08f6, 0x6c55_087f, 0x7094_0818, 0x74a0_07bd,
    0x787d_076c, 0x7c33_0723,
];
