//! Payload mapping for the alquran.cloud content API.
//!
//! The HTTP transport lives outside this crate; this module owns both
//! sides of the socket that are ours: the endpoint URLs a caller
//! fetches, the serde shapes of what comes back, the mapping into
//! domain types, and fallback content for the offline path.

use log::{debug, error};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::types::content::{Surah, Verse};

/// Base URL of the content API.
pub const API_BASE: &str = "https://api.alquran.cloud/v1";

/// CDN serving per-ayah recitation audio, keyed by global ayah number.
pub const AUDIO_CDN: &str = "https://cdn.islamic.network/quran/audio/128/ar.alafasy";

/// Translation edition fetched alongside the Arabic text.
pub const TRANSLATION_EDITION: &str = "en.asad";

/// How many chapters the text has.
pub const SURAH_COUNT: u32 = 114;

//------------------------------------------------------------------
// Endpoint URLs
//------------------------------------------------------------------

/// URL listing every chapter.
pub fn surah_list_url() -> String {
    format!("{}/surah", API_BASE)
}

/// URL for one chapter's Arabic text.
pub fn surah_url(number: u32) -> String {
    format!("{}/surah/{}", API_BASE, number)
}

/// URL for one chapter in the translation edition.
pub fn surah_translation_url(number: u32) -> String {
    format!("{}/surah/{}/{}", API_BASE, number, TRANSLATION_EDITION)
}

/// URL searching the whole text in English.
pub fn search_url(query: &str) -> String {
    format!("{}/search/{}/all/en", API_BASE, query)
}

/// Recitation audio URL for a verse, by its global ayah number.
pub fn audio_url(global_ayah: u32) -> String {
    format!("{}/{}.mp3", AUDIO_CDN, global_ayah)
}

//------------------------------------------------------------------
// Response payloads
//------------------------------------------------------------------

/// Every API response wraps its payload in a `data` field.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// One chapter record from the surah list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahRecord {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub number_of_ayahs: u32,
    pub revelation_type: String,
}

/// One chapter's worth of verses from a surah endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahPayload {
    pub number: u32,
    pub number_of_ayahs: u32,
    pub ayahs: Vec<AyahRecord>,
}

/// A single verse record inside a [`SurahPayload`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahRecord {
    /// Global ayah number across the whole text; keys the audio CDN.
    pub number: u32,
    pub number_in_surah: u32,
    pub text: String,
}

/// Search endpoint payload.
#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub matches: Vec<SearchMatch>,
}

/// One hit from the search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub number_in_surah: u32,
    pub text: String,
    #[serde(default)]
    pub english_text: Option<String>,
    pub surah: SurahRef,
}

/// Chapter reference embedded in a search hit.
#[derive(Debug, Deserialize)]
pub struct SurahRef {
    pub number: u32,
}

//------------------------------------------------------------------
// Payload -> domain mapping
//------------------------------------------------------------------

/// Parses the surah list response body into domain chapters.
pub fn parse_surahs(body: &str) -> Result<Vec<Surah>, String> {
    let envelope: Envelope<Vec<SurahRecord>> =
        serde_json::from_str(body).map_err(|e| format!("Malformed surah list payload: {}", e))?;
    debug!("Parsed {} surah records", envelope.data.len());
    Ok(envelope
        .data
        .into_iter()
        .map(|record| Surah {
            number: record.number,
            name: record.name,
            english_name: record.english_name,
            number_of_ayahs: record.number_of_ayahs,
            revelation_type: record.revelation_type,
        })
        .collect())
}

/// Parses the Arabic and translation bodies for one chapter and zips
/// them into domain verses.
///
/// The two payloads are paired by index; a missing translation entry
/// leaves that verse's translation empty rather than failing the whole
/// chapter. Each verse gets its recitation audio URL from the global
/// ayah number.
pub fn parse_verses(
    surah_number: u32,
    arabic_body: &str,
    translation_body: &str,
) -> Result<Vec<Verse>, String> {
    let arabic: Envelope<SurahPayload> = serde_json::from_str(arabic_body)
        .map_err(|e| format!("Malformed surah payload: {}", e))?;
    let translation: Envelope<SurahPayload> = serde_json::from_str(translation_body)
        .map_err(|e| format!("Malformed translation payload: {}", e))?;

    if arabic.data.ayahs.len() != translation.data.ayahs.len() {
        error!(
            "Translation length mismatch for surah {}: {} vs {}",
            surah_number,
            arabic.data.ayahs.len(),
            translation.data.ayahs.len()
        );
    }

    Ok(arabic
        .data
        .ayahs
        .iter()
        .enumerate()
        .map(|(index, ayah)| Verse {
            number: ayah.number_in_surah,
            text: ayah.text.clone(),
            translation: translation
                .data
                .ayahs
                .get(index)
                .map(|t| t.text.clone())
                .unwrap_or_default(),
            surah: surah_number,
            audio: Some(audio_url(ayah.number)),
        })
        .collect())
}

/// Parses a search response body into domain verses. Search hits carry
/// no audio.
pub fn parse_search(body: &str) -> Result<Vec<Verse>, String> {
    let envelope: Envelope<SearchPayload> =
        serde_json::from_str(body).map_err(|e| format!("Malformed search payload: {}", e))?;
    Ok(envelope
        .data
        .matches
        .into_iter()
        .map(|hit| Verse {
            number: hit.number_in_surah,
            text: hit.text,
            translation: hit.english_text.unwrap_or_default(),
            surah: hit.surah.number,
            audio: None,
        })
        .collect())
}

/// Picks a random chapter number when no chapter list is loaded yet.
pub fn random_surah(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=SURAH_COUNT)
}

/// Picks a random (chapter, verse) reference from the loaded chapter
/// list for the caller to fetch.
pub fn random_verse_ref(rng: &mut impl Rng, surahs: &[Surah]) -> Result<(u32, u32), String> {
    let surah = surahs
        .choose(rng)
        .ok_or_else(|| "No surahs loaded".to_string())?;
    let verse = rng.gen_range(1..=surah.number_of_ayahs.max(1));
    Ok((surah.number, verse))
}

//------------------------------------------------------------------
// Fallback content for the offline path
//------------------------------------------------------------------

/// The opening chapters, served when the surah list fetch fails.
pub static FALLBACK_SURAHS: Lazy<Vec<Surah>> = Lazy::new(|| {
    vec![
        Surah {
            number: 1,
            name: "الفاتحة".to_string(),
            english_name: "Al-Fatihah".to_string(),
            number_of_ayahs: 7,
            revelation_type: "Meccan".to_string(),
        },
        Surah {
            number: 2,
            name: "البقرة".to_string(),
            english_name: "Al-Baqarah".to_string(),
            number_of_ayahs: 286,
            revelation_type: "Medinan".to_string(),
        },
        Surah {
            number: 3,
            name: "آل عمران".to_string(),
            english_name: "Ali 'Imran".to_string(),
            number_of_ayahs: 200,
            revelation_type: "Medinan".to_string(),
        },
    ]
});

/// Opening verses of Al-Fatihah, served when a verse fetch fails.
static FALLBACK_AL_FATIHAH: Lazy<Vec<Verse>> = Lazy::new(|| {
    vec![
        Verse {
            number: 1,
            text: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ".to_string(),
            translation: "In the name of Allah, the Entirely Merciful, the Especially Merciful."
                .to_string(),
            surah: 1,
            audio: None,
        },
        Verse {
            number: 2,
            text: "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ".to_string(),
            translation: "[All] praise is [due] to Allah, Lord of the worlds.".to_string(),
            surah: 1,
            audio: None,
        },
    ]
});

/// Verses to show for a chapter when its fetch fails. Only the first
/// chapter has fallback text; everything else comes back empty.
pub fn fallback_verses(surah_number: u32) -> Vec<Verse> {
    if surah_number == 1 {
        FALLBACK_AL_FATIHAH.clone()
    } else {
        Vec::new()
    }
}

/// The verse shown as the daily verse when every fetch fails.
pub fn fallback_daily_verse() -> Verse {
    FALLBACK_AL_FATIHAH[0].clone()
}

#[cfg(test)]
mod api_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(surah_list_url(), "https://api.alquran.cloud/v1/surah");
        assert_eq!(surah_url(2), "https://api.alquran.cloud/v1/surah/2");
        assert_eq!(
            surah_translation_url(2),
            "https://api.alquran.cloud/v1/surah/2/en.asad"
        );
        assert_eq!(search_url("mercy"), "https://api.alquran.cloud/v1/search/mercy/all/en");
        assert_eq!(
            audio_url(262),
            "https://cdn.islamic.network/quran/audio/128/ar.alafasy/262.mp3"
        );
    }

    #[test]
    fn test_parse_surahs() {
        let body = r#"{"data": [
            {"number": 1, "name": "الفاتحة", "englishName": "Al-Fatihah",
             "numberOfAyahs": 7, "revelationType": "Meccan"},
            {"number": 2, "name": "البقرة", "englishName": "Al-Baqarah",
             "numberOfAyahs": 286, "revelationType": "Medinan"}
        ]}"#;
        let surahs = parse_surahs(body).unwrap();
        assert_eq!(surahs.len(), 2);
        assert_eq!(surahs[0].english_name, "Al-Fatihah");
        assert_eq!(surahs[1].number_of_ayahs, 286);
    }

    #[test]
    fn test_parse_surahs_rejects_malformed_body() {
        assert!(parse_surahs("not json").is_err());
        assert!(parse_surahs(r#"{"data": 42}"#).is_err());
    }

    #[test]
    fn test_parse_verses_zips_translation() {
        let arabic = r#"{"data": {"number": 1, "numberOfAyahs": 2, "ayahs": [
            {"number": 1, "numberInSurah": 1, "text": "بِسْمِ اللَّهِ"},
            {"number": 2, "numberInSurah": 2, "text": "الْحَمْدُ لِلَّهِ"}
        ]}}"#;
        let translation = r#"{"data": {"number": 1, "numberOfAyahs": 2, "ayahs": [
            {"number": 1, "numberInSurah": 1, "text": "In the name of Allah"},
            {"number": 2, "numberInSurah": 2, "text": "All praise is due to Allah"}
        ]}}"#;
        let verses = parse_verses(1, arabic, translation).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].translation, "In the name of Allah");
        assert_eq!(verses[1].number, 2);
        assert_eq!(verses[1].surah, 1);
        assert_eq!(
            verses[0].audio.as_deref(),
            Some("https://cdn.islamic.network/quran/audio/128/ar.alafasy/1.mp3")
        );
    }

    #[test]
    fn test_parse_verses_tolerates_short_translation() {
        let arabic = r#"{"data": {"number": 1, "numberOfAyahs": 2, "ayahs": [
            {"number": 1, "numberInSurah": 1, "text": "بِسْمِ اللَّهِ"},
            {"number": 2, "numberInSurah": 2, "text": "الْحَمْدُ لِلَّهِ"}
        ]}}"#;
        let translation = r#"{"data": {"number": 1, "numberOfAyahs": 2, "ayahs": [
            {"number": 1, "numberInSurah": 1, "text": "In the name of Allah"}
        ]}}"#;
        let verses = parse_verses(1, arabic, translation).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[1].translation, "");
    }

    #[test]
    fn test_parse_search() {
        let body = r#"{"data": {"matches": [
            {"numberInSurah": 255, "text": "Allah - there is no deity except Him",
             "englishText": "Allah - there is no deity except Him",
             "surah": {"number": 2}},
            {"numberInSurah": 4, "text": "Sovereign of the Day of Recompense",
             "surah": {"number": 1}}
        ]}}"#;
        let verses = parse_search(body).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].surah, 2);
        // Hits without an englishText field map to an empty translation.
        assert_eq!(verses[1].translation, "");
        assert_eq!(verses[0].audio, None);
    }

    #[test]
    fn test_random_verse_ref_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let (surah, verse) = random_verse_ref(&mut rng, &FALLBACK_SURAHS).unwrap();
            let record = FALLBACK_SURAHS.iter().find(|s| s.number == surah).unwrap();
            assert!(verse >= 1 && verse <= record.number_of_ayahs);
        }
    }

    #[test]
    fn test_random_surah_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let surah = random_surah(&mut rng);
            assert!(surah >= 1 && surah <= SURAH_COUNT);
        }
    }

    #[test]
    fn test_random_verse_ref_needs_surahs() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_verse_ref(&mut rng, &[]).is_err());
    }

    #[test]
    fn test_fallback_verses() {
        assert_eq!(fallback_verses(1).len(), 2);
        assert!(fallback_verses(99).is_empty());
        assert_eq!(fallback_daily_verse().surah, 1);
    }
}
