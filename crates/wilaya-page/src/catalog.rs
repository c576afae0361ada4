//! Region catalog
//!
//! The 69 wilayas in official numbering order. The table is a `static`, so
//! every [`Catalog`] handle shares it and nothing ever needs to be
//! synchronized or copied.

use serde::Serialize;

/// One administrative region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wilaya {
    /// Two-digit official code
    pub code: &'static str,
    /// Name in the site's primary language
    pub name_en: &'static str,
    /// Name in Arabic script
    pub name_ar: &'static str,
}

impl Wilaya {
    pub const fn new(code: &'static str, name_en: &'static str, name_ar: &'static str) -> Self {
        Self { code, name_en, name_ar }
    }

    /// Relative path of this wilaya's ranking page
    pub fn ranking_path(&self) -> String {
        format!("by-wilaya/wilaya_{}.md", self.code)
    }

    /// Match against a query that has already been lowercased.
    ///
    /// The Arabic name is compared as-is: the script has no case.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.name_en.to_lowercase().contains(lowered_query)
            || self.name_ar.contains(lowered_query)
            || self.code.contains(lowered_query)
    }
}

static WILAYAS: [Wilaya; 69] = [
    Wilaya::new("01", "Adrar", "أدرار"),
    Wilaya::new("02", "Chlef", "الشلف"),
    Wilaya::new("03", "Laghouat", "الأغواط"),
    Wilaya::new("04", "Oum El Bouaghi", "أم البواقي"),
    Wilaya::new("05", "Batna", "باتنة"),
    Wilaya::new("06", "Béjaïa", "بجاية"),
    Wilaya::new("07", "Biskra", "بسكرة"),
    Wilaya::new("08", "Béchar", "بشار"),
    Wilaya::new("09", "Blida", "البليدة"),
    Wilaya::new("10", "Bouira", "البويرة"),
    Wilaya::new("11", "Tamanrasset", "تمنراست"),
    Wilaya::new("12", "Tébessa", "تبسة"),
    Wilaya::new("13", "Tlemcen", "تلمسان"),
    Wilaya::new("14", "Tiaret", "تيارت"),
    Wilaya::new("15", "Tizi Ouzou", "تيزي وزو"),
    Wilaya::new("16", "Algiers", "الجزائر"),
    Wilaya::new("17", "Djelfa", "الجلفة"),
    Wilaya::new("18", "Jijel", "جيجل"),
    Wilaya::new("19", "Sétif", "سطيف"),
    Wilaya::new("20", "Saïda", "سعيدة"),
    Wilaya::new("21", "Skikda", "سكيكدة"),
    Wilaya::new("22", "Sidi Bel Abbès", "سيدي بلعباس"),
    Wilaya::new("23", "Annaba", "عنابة"),
    Wilaya::new("24", "Guelma", "قالمة"),
    Wilaya::new("25", "Constantine", "قسنطينة"),
    Wilaya::new("26", "Médéa", "المدية"),
    Wilaya::new("27", "Mostaganem", "مستغانم"),
    Wilaya::new("28", "M'Sila", "المسيلة"),
    Wilaya::new("29", "Mascara", "معسكر"),
    Wilaya::new("30", "Ouargla", "ورقلة"),
    Wilaya::new("31", "Oran", "وهران"),
    Wilaya::new("32", "El Bayadh", "البيض"),
    Wilaya::new("33", "Illizi", "إليزي"),
    Wilaya::new("34", "Bordj Bou Arréridj", "برج بوعريريج"),
    Wilaya::new("35", "Boumerdès", "بومرداس"),
    Wilaya::new("36", "El Tarf", "الطارف"),
    Wilaya::new("37", "Tindouf", "تندوف"),
    Wilaya::new("38", "Tissemsilt", "تيسمسيلت"),
    Wilaya::new("39", "El Oued", "الوادي"),
    Wilaya::new("40", "Khenchela", "خنشلة"),
    Wilaya::new("41", "Souk Ahras", "سوق أهراس"),
    Wilaya::new("42", "Tipaza", "تيبازة"),
    Wilaya::new("43", "Mila", "ميلة"),
    Wilaya::new("44", "Aïn Defla", "عين الدفلى"),
    Wilaya::new("45", "Naâma", "النعامة"),
    Wilaya::new("46", "Aïn Témouchent", "عين تموشنت"),
    Wilaya::new("47", "Ghardaïa", "غرداية"),
    Wilaya::new("48", "Relizane", "غليزان"),
    Wilaya::new("49", "Timimoun", "تيميمون"),
    Wilaya::new("50", "Bordj Badji Mokhtar", "برج باجي مختار"),
    Wilaya::new("51", "Ouled Djellal", "أولاد جلال"),
    Wilaya::new("52", "Béni Abbès", "بني عباس"),
    Wilaya::new("53", "In Salah", "عين صالح"),
    Wilaya::new("54", "In Guezzam", "عين قزام"),
    Wilaya::new("55", "Touggourt", "تقرت"),
    Wilaya::new("56", "Djanet", "جانت"),
    Wilaya::new("57", "El M'Ghair", "المغير"),
    Wilaya::new("58", "El Meniaa", "المنيعة"),
    Wilaya::new("59", "Aflou", "أفلو"),
    Wilaya::new("60", "Barika", "بريكة"),
    Wilaya::new("61", "Ksar Chellala", "قصر الشلالة"),
    Wilaya::new("62", "Messaad", "مسعد"),
    Wilaya::new("63", "Aïn Oussara", "عين وسارة"),
    Wilaya::new("64", "Bou Saâda", "بوسعادة"),
    Wilaya::new("65", "El Abiodh Sidi Cheikh", "الأبيض سيدي الشيخ"),
    Wilaya::new("66", "El Kantara", "القنطرة"),
    Wilaya::new("67", "Bir El Ater", "بئر العاتر"),
    Wilaya::new("68", "Ksar El Boukhari", "قصر البخاري"),
    Wilaya::new("69", "El Aricha", "العريشة"),
];

/// Read-only handle on the wilaya table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    regions: &'static [Wilaya],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::algeria()
    }
}

impl Catalog {
    /// All 69 wilayas of Algeria
    pub fn algeria() -> Self {
        Self { regions: &WILAYAS }
    }

    pub fn all(&self) -> &'static [Wilaya] {
        self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Wilaya> {
        self.regions.iter()
    }

    /// Look up a wilaya by its two-digit code
    pub fn get(&self, code: &str) -> Option<&'static Wilaya> {
        self.regions.iter().find(|w| w.code == code)
    }

    /// Look up a wilaya by primary name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&'static Wilaya> {
        let name = name.trim().to_lowercase();
        self.regions.iter().find(|w| w.name_en.to_lowercase() == name)
    }

    /// Wilayas matching a search query, in catalog order.
    ///
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&'static Wilaya> {
        let query = query.to_lowercase();
        self.regions.iter().filter(|w| w.matches(&query)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn codes(regions: &[&Wilaya]) -> Vec<&'static str> {
        regions.iter().map(|w| w.code).collect()
    }

    #[test]
    fn test_catalog_integrity() {
        let catalog = Catalog::algeria();
        assert_eq!(catalog.len(), 69);

        let mut seen = HashSet::new();
        for w in catalog.iter() {
            assert_eq!(w.code.len(), 2, "bad code {}", w.code);
            assert!(w.code.bytes().all(|b| b.is_ascii_digit()), "bad code {}", w.code);
            assert!(seen.insert(w.code), "duplicate code {}", w.code);
        }

        let sorted = catalog.all().windows(2).all(|pair| pair[0].code < pair[1].code);
        assert!(sorted);
        assert_eq!(catalog.all()[0].name_en, "Adrar");
        assert_eq!(catalog.all()[68].name_en, "El Aricha");
    }

    #[test]
    fn test_filter_by_code() {
        let result = Catalog::algeria().filter("16");
        assert_eq!(codes(&result), vec!["16"]);
        assert_eq!(result[0].name_en, "Algiers");
    }

    #[test]
    fn test_filter_case_insensitive() {
        let catalog = Catalog::algeria();
        let upper = catalog.filter("ORAN");
        let lower = catalog.filter("oran");
        assert_eq!(codes(&upper), codes(&lower));
        assert!(codes(&lower).contains(&"31"));
    }

    #[test]
    fn test_filter_union_of_fields() {
        let catalog = Catalog::algeria();
        let result = catalog.filter("a");
        assert!(!result.is_empty());
        for w in catalog.iter().filter(|w| w.name_en.to_lowercase().contains('a')) {
            assert!(result.contains(&w), "{} missing", w.name_en);
        }
    }

    #[test]
    fn test_filter_arabic_name() {
        let result = Catalog::algeria().filter("وهران");
        assert_eq!(codes(&result), vec!["31"]);
    }

    #[test]
    fn test_empty_query_is_full_catalog() {
        let catalog = Catalog::algeria();
        let result = catalog.filter("");
        assert_eq!(codes(&result), catalog.iter().map(|w| w.code).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_match() {
        assert!(Catalog::algeria().filter("zzz").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let result = Catalog::algeria().filter("el ");
        let got = codes(&result);
        let mut sorted = got.clone();
        sorted.sort_unstable();
        assert_eq!(got, sorted);
        assert!(got.len() > 3);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::algeria();
        assert_eq!(catalog.get("05").map(|w| w.name_en), Some("Batna"));
        assert_eq!(catalog.find_by_name("  tizi ouzou ").map(|w| w.code), Some("15"));
        assert_eq!(catalog.find_by_name("BÉJAÏA").map(|w| w.code), Some("06"));
        assert!(catalog.get("70").is_none());
    }

    #[test]
    fn test_ranking_path() {
        let batna = Catalog::algeria().get("05").unwrap();
        assert_eq!(batna.ranking_path(), "by-wilaya/wilaya_05.md");
    }
}
