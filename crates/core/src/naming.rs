//! Deterministic archive filename engine.
//!
//! Archive files are named from thesis metadata so the same thesis always
//! produces the same name: `{kind}_{worktype_tag}_{area}` with the area name
//! transliterated into a URL-safe form, an optional collision suffix, and the
//! extension of the source file.

use crate::thesis::FileKind;

/// Transliterate a Russian area-of-study name into a URL-safe ASCII form.
///
/// Cyrillic letters map to their common Latin renderings, spaces become
/// underscores, ASCII alphanumerics (and `-`/`_`) pass through, and anything
/// else is dropped. Case is preserved.
///
/// # Examples
///
/// ```
/// use praktika_core::naming::translit_ru;
///
/// assert_eq!(translit_ru("Программная инженерия"), "Programmnaja_inzhenerija");
/// assert_eq!(translit_ru("Математика и механика"), "Matematika_i_mehanika");
/// ```
pub fn translit_ru(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            ' ' => out.push('_'),
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => out.push(ch),
            _ => {
                if let Some(mapped) = translit_char(ch) {
                    out.push_str(mapped);
                }
            }
        }
    }
    out
}

/// Latin rendering for a single Cyrillic letter, or `None` if the character
/// has no mapping and should be dropped.
fn translit_char(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
        'е' => "e", 'ё' => "e", 'ж' => "zh", 'з' => "z", 'и' => "i",
        'й' => "j", 'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n",
        'о' => "o", 'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t",
        'у' => "u", 'ф' => "f", 'х' => "h", 'ц' => "c", 'ч' => "ch",
        'ш' => "sh", 'щ' => "sch", 'ъ' => "", 'ы' => "y", 'ь' => "",
        'э' => "e", 'ю' => "ju", 'я' => "ja",
        'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D",
        'Е' => "E", 'Ё' => "E", 'Ж' => "Zh", 'З' => "Z", 'И' => "I",
        'Й' => "J", 'К' => "K", 'Л' => "L", 'М' => "M", 'Н' => "N",
        'О' => "O", 'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T",
        'У' => "U", 'Ф' => "F", 'Х' => "H", 'Ц' => "C", 'Ч' => "Ch",
        'Ш' => "Sh", 'Щ' => "Sch", 'Ъ' => "", 'Ы' => "Y", 'Ь' => "",
        'Э' => "E", 'Ю' => "Ju", 'Я' => "Ja",
        _ => return None,
    };
    Some(mapped)
}

/// Build the archive filename for one artifact of a thesis.
///
/// Convention: `{kind}_{worktype_tag}_{area}{_index}{.ext}`
///
/// - `kind` = the artifact category tag
/// - `worktype_tag` = short Latin tag of the work type (e.g. `bachelor`)
/// - `area` = transliterated area-of-study name
/// - `_index` = `"_1"`, `"_2"`, ... when the base name is already taken
/// - `.ext` = extension of the source file, omitted if it has none
///
/// # Examples
///
/// ```
/// use praktika_core::naming::archive_filename;
/// use praktika_core::thesis::FileKind;
///
/// assert_eq!(
///     archive_filename(FileKind::Text, "bachelor", "Программная инженерия", None, Some("pdf")),
///     "text_bachelor_Programmnaja_inzhenerija.pdf"
/// );
/// assert_eq!(
///     archive_filename(FileKind::Presentation, "autumn_practice", "Физика", Some(2), Some("pptx")),
///     "presentation_autumn_practice_Fizika_2.pptx"
/// );
/// ```
pub fn archive_filename(
    kind: FileKind,
    worktype_tag: &str,
    area: &str,
    index: Option<u32>,
    ext: Option<&str>,
) -> String {
    let mut name = format!("{}_{}_{}", kind.tag(), worktype_tag, translit_ru(area));

    if let Some(idx) = index {
        name.push('_');
        name.push_str(&idx.to_string());
    }

    if let Some(ext) = ext {
        name.push('.');
        name.push_str(ext);
    }

    name
}

/// Extension of a filename, if it has one.
///
/// A leading dot (hidden file) does not count as an extension separator.
pub fn file_ext(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
