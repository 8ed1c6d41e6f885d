use serde::Serialize;

/// Picker metadata for one book, plus the code the Spanish markup uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub chapter_count: u32,
    pub markup_code: &'static str,
}

const fn book(
    id: &'static str,
    display_name: &'static str,
    chapter_count: u32,
    markup_code: &'static str,
) -> BookInfo {
    BookInfo {
        id,
        display_name,
        chapter_count,
        markup_code,
    }
}

static OLD_TESTAMENT: &[BookInfo] = &[
    book("Genesis", "Génesis", 50, "GEN"),
    book("Exodus", "Éxodo", 40, "EXO"),
    book("Leviticus", "Levítico", 27, "LEV"),
    book("Numbers", "Números", 36, "NUM"),
    book("Deuteronomy", "Deuteronomio", 34, "DEU"),
    book("Joshua", "Josué", 24, "JOS"),
    book("Judges", "Jueces", 21, "JDG"),
    book("Ruth", "Rut", 4, "RUT"),
    book("1Samuel", "1 Samuel", 31, "1SA"),
    book("2Samuel", "2 Samuel", 24, "2SA"),
    book("1Kings", "1 Reyes", 22, "1KI"),
    book("2Kings", "2 Reyes", 25, "2KI"),
    book("1Chronicles", "1 Crónicas", 29, "1CH"),
    book("2Chronicles", "2 Crónicas", 36, "2CH"),
    book("Ezra", "Esdras", 10, "EZR"),
    book("Nehemiah", "Nehemías", 13, "NEH"),
    book("Esther", "Ester", 10, "EST"),
    book("Job", "Job", 42, "JOB"),
    book("Psalms", "Salmos", 150, "PSA"),
    book("Proverbs", "Proverbios", 31, "PRO"),
    book("Ecclesiastes", "Eclesiastés", 12, "ECC"),
    book("SongOfSongs", "Cantares", 8, "SNG"),
    book("Isaiah", "Isaías", 66, "ISA"),
    book("Jeremiah", "Jeremías", 52, "JER"),
    book("Lamentations", "Lamentaciones", 5, "LAM"),
    book("Ezekiel", "Ezequiel", 48, "EZK"),
    book("Daniel", "Daniel", 12, "DAN"),
    book("Hosea", "Oseas", 14, "HOS"),
    book("Joel", "Joel", 3, "JOL"),
    book("Amos", "Amós", 9, "AMO"),
    book("Obadiah", "Abdías", 1, "OBA"),
    book("Jonah", "Jonás", 4, "JON"),
    book("Micah", "Miqueas", 7, "MIC"),
    book("Nahum", "Nahúm", 3, "NAM"),
    book("Habakkuk", "Habacuc", 3, "HAB"),
    book("Zephaniah", "Sofonías", 3, "ZEP"),
    book("Haggai", "Hageo", 2, "HAG"),
    book("Zechariah", "Zacarías", 14, "ZEC"),
    book("Malachi", "Malaquías", 4, "MAL"),
];

/// All Old Testament books in canonical order.
pub fn books() -> &'static [BookInfo] {
    OLD_TESTAMENT
}

pub fn find(id: &str) -> Option<&'static BookInfo> {
    OLD_TESTAMENT.iter().find(|b| b.id == id)
}

/// Book code used in the Spanish markup's `BOOK.CHAPTER.VERSE` locations.
///
/// Unknown identifiers fall back to their uppercased form.
pub fn markup_code(id: &str) -> String {
    find(id)
        .map(|b| b.markup_code.to_string())
        .unwrap_or_else(|| id.to_uppercase())
}
