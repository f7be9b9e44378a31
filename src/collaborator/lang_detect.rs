//! collaborator/lang_detect.rs
//! Language detection backed by `whatlang` (trigram profiles, 69 languages).
//!
//! `whatlang` reports ISO 639-3 codes; they are mapped to the two-letter
//! ISO 639-1 codes most callers configure (`"eng"` → `"en"`). Languages
//! without a two-letter code keep their three-letter one.

use super::{CollaboratorError, LanguageDetector};
use phf::{Map, phf_map};

static ISO_639_1: Map<&'static str, &'static str> = phf_map! {
    "afr" => "af", "aka" => "ak", "amh" => "am", "ara" => "ar", "aze" => "az",
    "bel" => "be", "ben" => "bn", "bul" => "bg", "cat" => "ca", "ces" => "cs",
    "cmn" => "zh", "dan" => "da", "deu" => "de", "ell" => "el", "eng" => "en",
    "epo" => "eo", "est" => "et", "fin" => "fi", "fra" => "fr", "guj" => "gu",
    "heb" => "he", "hin" => "hi", "hrv" => "hr", "hun" => "hu", "hye" => "hy",
    "ind" => "id", "ita" => "it", "jav" => "jv", "jpn" => "ja", "kan" => "kn",
    "kat" => "ka", "khm" => "km", "kor" => "ko", "lat" => "la", "lav" => "lv",
    "lit" => "lt", "mal" => "ml", "mar" => "mr", "mkd" => "mk", "mya" => "my",
    "nep" => "ne", "nld" => "nl", "nob" => "no", "ori" => "or", "pan" => "pa",
    "pes" => "fa", "pol" => "pl", "por" => "pt", "ron" => "ro", "rus" => "ru",
    "sin" => "si", "slk" => "sk", "slv" => "sl", "sna" => "sn", "spa" => "es",
    "srp" => "sr", "swe" => "sv", "tam" => "ta", "tel" => "te", "tgl" => "tl",
    "tha" => "th", "tuk" => "tk", "tur" => "tr", "ukr" => "uk", "urd" => "ur",
    "uzb" => "uz", "vie" => "vi", "yid" => "yi", "zul" => "zu",
};

/// `min_confidence` in `0.0..=1.0`; answers below it count as "no answer".
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector {
    pub min_confidence: f64,
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<Option<String>, CollaboratorError> {
        let Some(info) = whatlang::detect(text) else {
            return Ok(None);
        };
        if info.confidence() < self.min_confidence {
            return Ok(None);
        }
        let code = info.lang().code();
        Ok(Some(ISO_639_1.get(code).copied().unwrap_or(code).to_string()))
    }
}
