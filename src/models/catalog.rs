//! Integer code tables shared with the SurveyMars API.
//!
//! Each entry pairs a wire code with an English and a native label. The codes
//! are part of the API contract. Entries the service does not currently offer
//! stay in the table but are marked disabled and left out of [`catalog`]
//! listings.
//!
//! [`catalog`]: SurveyType::catalog

/// One row of a code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry<T> {
    pub value: T,
    pub code: u8,
    pub en_name: &'static str,
    pub cn_name: &'static str,
    pub enabled: bool,
}

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $code:literal, $en:literal, $cn:literal, $enabled:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// All entries in code order.
            pub const ALL: &'static [CodeEntry<Self>] = &[
                $(CodeEntry {
                    value: Self::$variant,
                    code: $code,
                    en_name: $en,
                    cn_name: $cn,
                    enabled: $enabled,
                },)+
            ];

            fn entry(&self) -> &'static CodeEntry<Self> {
                // ALL holds one row per variant
                &Self::ALL[*self as usize]
            }

            pub fn code(&self) -> u8 {
                self.entry().code
            }

            pub fn en_name(&self) -> &'static str {
                self.entry().en_name
            }

            pub fn cn_name(&self) -> &'static str {
                self.entry().cn_name
            }

            /// Whether the service currently offers this entry.
            pub fn is_enabled(&self) -> bool {
                self.entry().enabled
            }

            pub fn from_code(code: i64) -> Option<Self> {
                Self::ALL
                    .iter()
                    .find(|entry| i64::from(entry.code) == code)
                    .map(|entry| entry.value)
            }

            /// One `"{code}: {en} {cn}"` line per enabled entry.
            pub fn catalog() -> String {
                Self::ALL
                    .iter()
                    .filter(|entry| entry.enabled)
                    .map(|entry| format!("{}: {} {}", entry.code, entry.en_name, entry.cn_name))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    };
}

code_table! {
    /// Kind of survey to generate. Code 2 (Vote) is retired.
    pub enum SurveyType {
        Survey = 1, "Survey", "调查", true;
        E360 = 3, "360-Degree Evaluation", "360度评估", true;
        Form = 4, "Form", "表单", true;
        FormActivity = 5, "FormActivity", "活动报名", true;
        FormSign = 6, "FormSign", "报名签到", true;
    }
}

code_table! {
    /// Language the survey is generated in. Code 25 is unassigned; only the
    /// Chinese and English entries are currently offered.
    pub enum LocalizeLanguage {
        ChineseSimplified = 1, "ChineseSimplified", "简体中文", true;
        English = 2, "English", "英语", true;
        ChineseTraditional = 3, "ChineseTraditional", "繁体中文", true;
        Japanese = 4, "Japanese", "日本语", false;
        Korean = 5, "Korean", "韩语", false;
        Arabic = 6, "Arabic", "阿拉伯语", false;
        French = 7, "French", "法语", false;
        German = 8, "German", "德语", false;
        Spanish = 9, "Spanish", "西班牙语", false;
        Portuguese = 10, "Portuguese", "葡萄牙语", false;
        Italian = 11, "Italian", "意大利语", false;
        Russian = 12, "Russian", "俄语", false;
        Thai = 13, "Thai", "泰语", false;
        Turkish = 14, "Turkish", "土耳其语", false;
        Indonesian = 15, "Indonesian", "印尼语", false;
        Vietnamese = 16, "Vietnamese", "越南语", false;
        Polish = 17, "Polish", "波兰语", false;
        Dutch = 18, "Dutch", "荷兰语", false;
        Hindi = 19, "Hindi", "印地语", false;
        Irish = 20, "Irish", "爱尔兰语", false;
        Bengali = 21, "Bengali", "孟加拉语", false;
        Hebrew = 22, "Hebrew", "希伯来语", false;
        Swedish = 23, "Swedish", "瑞典语", false;
        Ukrainian = 24, "Ukrainian", "乌克兰语", false;
        Czech = 26, "Czech", "捷克语", false;
        Danish = 27, "Danish", "丹麦语", false;
        Finnish = 28, "Finnish", "芬兰语", false;
        Hungarian = 29, "Hungarian", "匈牙利语", false;
        Malay = 30, "Malay", "马来语", false;
        Norwegian = 31, "Norwegian", "挪威语", false;
        Romanian = 32, "Romanian", "罗马尼亚语", false;
        Serbian = 33, "Serbian", "塞尔维亚语", false;
        Slovak = 34, "Slovak", "斯洛伐克语", false;
        Slovenian = 35, "Slovenian", "斯洛文尼亚语", false;
        Filipino = 36, "Filipino", "菲律宾语", false;
        Lithuanian = 37, "Lithuanian", "立陶宛语", false;
        Latvian = 38, "Latvian", "拉脱维亚语", false;
        Odia = 39, "Odia", "奥利亚语", false;
        Macedonian = 40, "Macedonian", "马其顿语", false;
        Malagasy = 41, "Malagasy", "马尔加什语", false;
        Nepali = 42, "Nepali", "尼泊尔语", false;
        Malayalam = 43, "Malayalam", "马拉雅拉姆语", false;
        Maltese = 44, "Maltese", "马耳他语", false;
        Maori = 45, "Maori", "毛利语", false;
        Marathi = 46, "Marathi", "马拉地语", false;
        Mongolian = 47, "Mongolian", "蒙古语", false;
        Burmese = 48, "Burmese", "缅甸语", false;
        Greek = 49, "Greek", "希腊语", false;
    }
}
