use tracing::debug;

/// A subtitle language as the host names it, with the names addic7ed.com
/// uses for it on episode pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub site_names: &'static [&'static str],
    pub iso639_1: &'static str,
}

impl Language {
    const fn new(
        name: &'static str,
        site_names: &'static [&'static str],
        iso639_1: &'static str,
    ) -> Self {
        Self {
            name,
            site_names,
            iso639_1,
        }
    }

    pub fn matches_site_name(&self, site_name: &str) -> bool {
        self.site_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(site_name.trim()))
    }
}

const LANGUAGES: &[Language] = &[
    Language::new("Albanian", &["Albanian"], "sq"),
    Language::new("Arabic", &["Arabic"], "ar"),
    Language::new("Basque", &["Euskera"], "eu"),
    Language::new("Bengali", &["Bengali"], "bn"),
    Language::new("Bosnian", &["Bosnian"], "bs"),
    Language::new("Bulgarian", &["Bulgarian"], "bg"),
    Language::new("Catalan", &["Català", "Catala"], "ca"),
    Language::new("Chinese (Simple)", &["Chinese (Simplified)"], "zh"),
    Language::new("Chinese (Traditional)", &["Chinese (Traditional)"], "zh"),
    Language::new("Croatian", &["Croatian"], "hr"),
    Language::new("Czech", &["Czech"], "cs"),
    Language::new("Danish", &["Danish"], "da"),
    Language::new("Dutch", &["Dutch"], "nl"),
    Language::new("English", &["English"], "en"),
    Language::new("Estonian", &["Estonian"], "et"),
    Language::new("Finnish", &["Finnish"], "fi"),
    Language::new("French", &["French", "French (Canadian)"], "fr"),
    Language::new("Galician", &["Galego", "Galician"], "gl"),
    Language::new("German", &["German"], "de"),
    Language::new("Greek", &["Greek"], "el"),
    Language::new("Hebrew", &["Hebrew"], "he"),
    Language::new("Hindi", &["Hindi"], "hi"),
    Language::new("Hungarian", &["Hungarian"], "hu"),
    Language::new("Indonesian", &["Indonesian"], "id"),
    Language::new("Italian", &["Italian"], "it"),
    Language::new("Japanese", &["Japanese"], "ja"),
    Language::new("Korean", &["Korean"], "ko"),
    Language::new("Macedonian", &["Macedonian"], "mk"),
    Language::new("Malay", &["Malay"], "ms"),
    Language::new("Norwegian", &["Norwegian"], "no"),
    Language::new("Persian", &["Persian"], "fa"),
    Language::new("Polish", &["Polish"], "pl"),
    Language::new("Portuguese", &["Portuguese"], "pt"),
    Language::new("Portuguese (Brazil)", &["Portuguese (Brazilian)"], "pb"),
    Language::new("Romanian", &["Romanian"], "ro"),
    Language::new("Russian", &["Russian"], "ru"),
    Language::new("Serbian", &["Serbian (Latin)", "Serbian (Cyrillic)"], "sr"),
    Language::new("Slovak", &["Slovak"], "sk"),
    Language::new("Slovenian", &["Slovenian"], "sl"),
    Language::new(
        "Spanish",
        &["Spanish", "Spanish (Latin America)", "Spanish (Spain)"],
        "es",
    ),
    Language::new("Swedish", &["Swedish"], "sv"),
    Language::new("Thai", &["Thai"], "th"),
    Language::new("Turkish", &["Turkish"], "tr"),
    Language::new("Ukrainian", &["Ukrainian"], "uk"),
    Language::new("Vietnamese", &["Vietnamese"], "vi"),
];

pub fn find_by_name(name: &str) -> Option<&'static Language> {
    let name = name.trim();
    LANGUAGES
        .iter()
        .find(|language| language.name.eq_ignore_ascii_case(name))
}

/// Resolves the comma-separated host language list into known languages,
/// keeping the host's order and dropping duplicates.
pub fn parse_language_list(list: &str) -> Vec<&'static Language> {
    let mut languages: Vec<&'static Language> = Vec::new();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match find_by_name(name) {
            Some(language) if !languages.contains(&language) => languages.push(language),
            Some(_) => {}
            None => debug!("Skipping unsupported language: {name}"),
        }
    }
    languages
}

/// Two-letter code for the flag icon next to a host language name.
pub fn iso639_1(name: &str) -> Option<&'static str> {
    find_by_name(name).map(|language| language.iso639_1)
}
