//! 希腊字母转写
//!
//! 将希腊字母码位转换为拉丁字母名（如 'β' → "beta"），非希腊字符原样保留

use std::collections::HashMap;

use crate::rule::Rule;
use crate::types::Case;

/// 希腊字母名映射表
///
/// 覆盖 U+0370..U+03E1 与 U+03F0..U+03FF 两个区段内全部字母码位：
/// 基本大小写、声调/分音符变体、古体字母、符号变体。
/// 表中保存随字母大小写的名称（'Β' → "BETA"，'β' → "beta"）。
/// 无字母名的码位（数码符号 ʹ ͵、下加点 ͺ、重音符 ΄ ΅、间隔点 ·、
/// 问号 ; 及反月形 ϵ 符号 ϶）不入表，查询返回 None。
pub struct GreekLetterMap {
    map: HashMap<char, &'static str>,
}

impl GreekLetterMap {
    pub fn new() -> Self {
        let map = HashMap::from([
            // 古体与边缘字母 (U+0370..U+037F)
            ('Ͱ', "HETA"),
            ('ͱ', "heta"),
            ('Ͳ', "SAMPI"),
            ('ͳ', "sampi"),
            ('Ͷ', "DIGAMMA"),
            ('ͷ', "digamma"),
            ('ͻ', "sigma"),
            ('ͼ', "sigma"),
            ('ͽ', "sigma"),
            ('Ϳ', "YOT"),
            // 带声调的大写字母
            ('Ά', "ALPHA"),
            ('Έ', "EPSILON"),
            ('Ή', "ETA"),
            ('Ί', "IOTA"),
            ('Ό', "OMICRON"),
            ('Ύ', "UPSILON"),
            ('Ώ', "OMEGA"),
            // 基本大写字母
            ('Α', "ALPHA"),
            ('Β', "BETA"),
            ('Γ', "GAMMA"),
            ('Δ', "DELTA"),
            ('Ε', "EPSILON"),
            ('Ζ', "ZETA"),
            ('Η', "ETA"),
            ('Θ', "THETA"),
            ('Ι', "IOTA"),
            ('Κ', "KAPPA"),
            ('Λ', "LAMDA"),
            ('Μ', "MU"),
            ('Ν', "NU"),
            ('Ξ', "XI"),
            ('Ο', "OMICRON"),
            ('Π', "PI"),
            ('Ρ', "RHO"),
            ('Σ', "SIGMA"),
            ('Τ', "TAU"),
            ('Υ', "UPSILON"),
            ('Φ', "PHI"),
            ('Χ', "CHI"),
            ('Ψ', "PSI"),
            ('Ω', "OMEGA"),
            ('Ϊ', "IOTA"),
            ('Ϋ', "UPSILON"),
            // 带声调/分音符的小写字母
            ('ΐ', "iota"),
            ('ά', "alpha"),
            ('έ', "epsilon"),
            ('ή', "eta"),
            ('ί', "iota"),
            ('ΰ', "upsilon"),
            ('ϊ', "iota"),
            ('ϋ', "upsilon"),
            ('ό', "omicron"),
            ('ύ', "upsilon"),
            ('ώ', "omega"),
            // 基本小写字母
            ('α', "alpha"),
            ('β', "beta"),
            ('γ', "gamma"),
            ('δ', "delta"),
            ('ε', "epsilon"),
            ('ζ', "zeta"),
            ('η', "eta"),
            ('θ', "theta"),
            ('ι', "iota"),
            ('κ', "kappa"),
            ('λ', "lamda"),
            ('μ', "mu"),
            ('ν', "nu"),
            ('ξ', "xi"),
            ('ο', "omicron"),
            ('π', "pi"),
            ('ρ', "rho"),
            ('ς', "sigma"),
            ('σ', "sigma"),
            ('τ', "tau"),
            ('υ', "upsilon"),
            ('φ', "phi"),
            ('χ', "chi"),
            ('ψ', "psi"),
            ('ω', "omega"),
            // 符号变体 (U+03CF..U+03D7)
            ('Ϗ', "KAI"),
            ('ϐ', "beta"),
            ('ϑ', "theta"),
            ('ϒ', "UPSILON"),
            ('ϓ', "UPSILON"),
            ('ϔ', "UPSILON"),
            ('ϕ', "phi"),
            ('ϖ', "pi"),
            ('ϗ', "kai"),
            // 古体字母 (U+03D8..U+03E1)
            ('Ϙ', "KOPPA"),
            ('ϙ', "koppa"),
            ('Ϛ', "STIGMA"),
            ('ϛ', "stigma"),
            ('Ϝ', "DIGAMMA"),
            ('ϝ', "digamma"),
            ('Ϟ', "KOPPA"),
            ('ϟ', "koppa"),
            ('Ϡ', "SAMPI"),
            ('ϡ', "sampi"),
            // 符号变体与边缘字母 (U+03F0..U+03FF)
            ('ϰ', "kappa"),
            ('ϱ', "rho"),
            ('ϲ', "sigma"),
            ('ϳ', "yot"),
            ('ϴ', "THETA"),
            ('ϵ', "epsilon"),
            ('Ϸ', "SHO"),
            ('ϸ', "sho"),
            ('Ϲ', "SIGMA"),
            ('Ϻ', "SAN"),
            ('ϻ', "san"),
            ('ϼ', "rho"),
            ('Ͻ', "SIGMA"),
            ('Ͼ', "SIGMA"),
            ('Ͽ', "SIGMA"),
        ]);

        Self { map }
    }

    /// 查找字母名
    ///
    /// 返回 None 表示该码位不是希腊字母或无字母名
    pub fn try_map(&self, ch: char) -> Option<&'static str> {
        self.map.get(&ch).copied()
    }
}

impl Default for GreekLetterMap {
    fn default() -> Self {
        Self::new()
    }
}

/// 希腊字母转拉丁字母名
///
/// 注意：'μ' 转换为 "mu"，不做 SI 词头（micro）区分
pub struct GreekToAlpha {
    map: GreekLetterMap,
    /// 大小写覆盖；None 时名称跟随字母本身大小写
    pub case: Option<Case>,
}

impl GreekToAlpha {
    pub fn new() -> Self {
        Self {
            map: GreekLetterMap::new(),
            case: None,
        }
    }

    /// 创建固定大小写输出的规则
    pub fn with_case(case: Case) -> Self {
        Self {
            map: GreekLetterMap::new(),
            case: Some(case),
        }
    }
}

impl Default for GreekToAlpha {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for GreekToAlpha {
    fn name(&self) -> &'static str {
        "greek_to_alpha"
    }

    fn apply(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());

        for ch in text.chars() {
            match self.map.try_map(ch) {
                Some(name) => match self.case {
                    Some(Case::Upper) => result.push_str(&name.to_uppercase()),
                    Some(Case::Lower) => result.push_str(&name.to_lowercase()),
                    None => result.push_str(name),
                },
                // 非希腊字符或无字母名：原样保留
                None => result.push(ch),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_basic() {
        let rule = GreekToAlpha::new();
        assert_eq!(rule.apply("β ver"), "beta ver");
    }

    #[test]
    fn test_greek_mu_not_micro() {
        let rule = GreekToAlpha::new();
        // 'μ' 按字母名转写，不按 SI 词头读作 micro
        assert_eq!(rule.apply("50 μg"), "50 mug");
    }

    #[test]
    fn test_greek_case_follows_letter() {
        let rule = GreekToAlpha::new();
        assert_eq!(rule.apply("Β"), "BETA");
        assert_eq!(rule.apply("Δ δ"), "DELTA delta");
    }

    #[test]
    fn test_greek_case_override() {
        let lower = GreekToAlpha::with_case(Case::Lower);
        assert_eq!(lower.apply("Β"), "beta");

        let upper = GreekToAlpha::with_case(Case::Upper);
        assert_eq!(upper.apply("β"), "BETA");
    }

    #[test]
    fn test_greek_symbol_variants() {
        let rule = GreekToAlpha::new();
        // 词尾 sigma 与符号变体收敛到同一字母名
        assert_eq!(rule.apply("ς σ ϲ"), "sigma sigma sigma");
        assert_eq!(rule.apply("ϐ"), "beta");
        assert_eq!(rule.apply("ϑ"), "theta");
        assert_eq!(rule.apply("ϰ"), "kappa");
    }

    #[test]
    fn test_greek_tonos_variants() {
        let rule = GreekToAlpha::new();
        assert_eq!(rule.apply("ά έ ή"), "alpha epsilon eta");
        assert_eq!(rule.apply("Ά Ώ"), "ALPHA OMEGA");
    }

    #[test]
    fn test_greek_archaic_letters() {
        let rule = GreekToAlpha::new();
        assert_eq!(rule.apply("Ϙ ϙ"), "KOPPA koppa");
        assert_eq!(rule.apply("Ϸ ϸ"), "SHO sho");
        assert_eq!(rule.apply("Ϻ ϻ"), "SAN san");
        assert_eq!(rule.apply("Ͷ ͷ"), "DIGAMMA digamma");
    }

    #[test]
    fn test_greek_lamda_spelling() {
        // 字母名沿用 Unicode 拼写 LAMDA
        let rule = GreekToAlpha::new();
        assert_eq!(rule.apply("λ Λ"), "lamda LAMDA");
    }

    #[test]
    fn test_greek_unmapped_passthrough() {
        let rule = GreekToAlpha::new();
        // 数码符号、下加点、间隔点均无字母名，原样透传
        assert_eq!(rule.apply("ʹ ͺ ·"), "ʹ ͺ ·");
    }

    #[test]
    fn test_non_greek_untouched() {
        let rule = GreekToAlpha::new();
        assert_eq!(rule.apply("plain ascii 123"), "plain ascii 123");
        assert_eq!(rule.apply("你好"), "你好");
    }

    #[test]
    fn test_map_lookup() {
        let map = GreekLetterMap::new();
        assert_eq!(map.try_map('β'), Some("beta"));
        assert_eq!(map.try_map('Σ'), Some("SIGMA"));
        assert_eq!(map.try_map('a'), None);
    }
}
