//! Word Bank
//!
//! Built-in per-language word pools used to deal a board. Deployments with
//! their own vocabulary plug in through [`WordSource`].

use serde::{Deserialize, Serialize};

/// Languages a room can be configured with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Czech
    Cs,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
}

impl Language {
    /// Parse a two-letter language code. Unknown codes map to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "cs" => Language::Cs,
            "es" => Language::Es,
            "fr" => Language::Fr,
            "de" => Language::De,
            _ => Language::En,
        }
    }
}

/// Supplies the word pool a board is dealt from.
///
/// The pool must contain at least 25 distinct words; shorter pools make
/// board generation fail with `InsufficientWords`.
pub trait WordSource: Send + Sync {
    /// Full word pool for a language.
    fn word_pool(&self, language: Language) -> Vec<String>;
}

/// The built-in word bank shipped with the server.
///
/// English and Czech have dedicated pools. Spanish, French and German
/// currently fall back to English.
/// TODO: translate the pool for es/fr/de.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinWordBank;

impl WordSource for BuiltinWordBank {
    fn word_pool(&self, language: Language) -> Vec<String> {
        let words = match language {
            Language::Cs => WORDS_CS,
            _ => WORDS_EN,
        };
        words.iter().map(|w| w.to_string()).collect()
    }
}

static WORDS_EN: &[&str] = &[
    "AFRICA", "AGENT", "AIR", "ALIEN", "ALPS", "AMAZON", "AMBULANCE", "AMERICA", "ANGEL", "ANTARCTICA",
    "APPLE", "ARM", "ATLANTIS", "AUSTRALIA", "AZTEC", "BACK", "BALL", "BAND", "BANK", "BAR",
    "BARK", "BAT", "BATTERY", "BEACH", "BEAR", "BEAT", "BED", "BEIJING", "BELL", "BELT",
    "BERLIN", "BERMUDA", "BERRY", "BILL", "BLOCK", "BOARD", "BOLT", "BOMB", "BOND", "BOOM",
    "BOOT", "BOTTLE", "BOW", "BOX", "BRIDGE", "BRUSH", "BUCK", "BUFFALO", "BUG", "BUGLE",
    "BUTTON", "CALF", "CANADA", "CAP", "CAPITAL", "CAR", "CARD", "CARROT", "CASINO", "CAST",
    "CAT", "CELL", "CENTAUR", "CENTER", "CHAIR", "CHANGE", "CHARGE", "CHECK", "CHEST", "CHICK",
    "CHINA", "CHOCOLATE", "CHURCH", "CIRCLE", "CLIFF", "CLOAK", "CLUB", "CODE", "COLD", "COMIC",
    "COMPOUND", "CONCERT", "CONDUCTOR", "CONTRACT", "COOK", "COPPER", "COTTON", "COURT", "COVER", "CRANE",
    "CRASH", "CRICKET", "CROSS", "CROWN", "CYCLE", "CZECH", "DANCE", "DATE", "DAY", "DEATH",
    "DECK", "DEGREE", "DIAMOND", "DICE", "DINOSAUR", "DISEASE", "DOCTOR", "DOG", "DRAFT", "DRAGON",
    "DRESS", "DRILL", "DROP", "DUCK", "DWARF", "EAGLE", "EGYPT", "EMBASSY", "ENGINE", "ENGLAND",
    "EUROPE", "EYE", "FACE", "FAIR", "FALL", "FAN", "FENCE", "FIELD", "FIGHTER", "FIGURE",
    "FILE", "FILM", "FIRE", "FISH", "FLUTE", "FLY", "FOOT", "FORCE", "FOREST", "FORK",
    "FRANCE", "GAME", "GAS", "GENIUS", "GERMANY", "GHOST", "GIANT", "GLASS", "GLOVE", "GOLD",
    "GRACE", "GRASS", "GREECE", "GREEN", "GROUND", "HAM", "HAND", "HAWK", "HEAD", "HEART",
    "HELICOPTER", "HIMALAYAS", "HOLE", "HOLLYWOOD", "HONEY", "HOOD", "HOOK", "HORN", "HORSE", "HORSESHOE",
    "HOSPITAL", "HOTEL", "ICE", "ICE CREAM", "INDIA", "IRON", "IVORY", "JACK", "JAM", "JET",
    "JUPITER", "KANGAROO", "KETCHUP", "KEY", "KID", "KING", "KIWI", "KNIFE", "KNIGHT", "LAB",
    "LAP", "LASER", "LAWYER", "LEAD", "LEMON", "LEPRECHAUN", "LIFE", "LIGHT", "LIMOUSINE", "LINE",
    "LINK", "LION", "LITTER", "LOCH NESS", "LOCK", "LOG", "LONDON", "LUCK", "MAIL", "MAMMOTH",
    "MAPLE", "MARBLE", "MARCH", "MASS", "MATCH", "MERCURY", "MEXICO", "MICROSCOPE", "MILLIONAIRE", "MINE",
    "MINT", "MISSILE", "MODEL", "MOLE", "MOON", "MOSCOW", "MOUNT", "MOUSE", "MOUTH", "MUG",
    "NAIL", "NEEDLE", "NET", "NEW YORK", "NIGHT", "NINJA", "NOTE", "NOVEL", "NURSE", "NUT",
    "OCTOPUS", "OIL", "OLIVE", "OLYMPUS", "OPERA", "ORANGE", "ORGAN", "PALM", "PAN", "PANTS",
    "PAPER", "PARACHUTE", "PARK", "PART", "PASS", "PASTE", "PENGUIN", "PHOENIX", "PIANO", "PIE",
    "PILOT", "PIN", "PIPE", "PIRATE", "PISTOL", "PIT", "PITCH", "PLANE", "PLASTIC", "PLATE",
    "PLATYPUS", "PLAY", "PLOT", "POINT", "POISON", "POLE", "POLICE", "POOL", "PORT", "POST",
    "POUND", "PRESS", "PRINCESS", "PUMPKIN", "PUPIL", "PYRAMID", "QUEEN", "RABBIT", "RACKET", "RAY",
    "REVOLUTION", "RING", "ROBIN", "ROBOT", "ROCK", "ROME", "ROOT", "ROSE", "ROULETTE", "ROUND",
    "ROW", "RULER", "SATELLITE", "SATURN", "SCALE", "SCHOOL", "SCIENTIST", "SCORPION", "SCREEN", "SCUBA DIVER",
    "SEAL", "SERVER", "SHADOW", "SHAKESPEARE", "SHARK", "SHIP", "SHOE", "SHOP", "SHOT", "SINK",
    "SKYSCRAPER", "SLIP", "SLUG", "SMUGGLER", "SNOW", "SNOWMAN", "SOCK", "SOLDIER", "SOUL", "SOUND",
    "SPACE", "SPELL", "SPIDER", "SPIKE", "SPINE", "SPOT", "SPRING", "SPY", "SQUARE", "STADIUM",
    "STAFF", "STAR", "STATE", "STICK", "STOCK", "STRAW", "STREAM", "STRIKE", "STRING", "SUB",
    "SUIT", "SUPERHERO", "SWING", "SWITCH", "TABLE", "TABLET", "TAG", "TAIL", "TAP", "TEACHER",
    "TELESCOPE", "TEMPLE", "THEATER", "THIEF", "THUMB", "TICK", "TIE", "TIME", "TOKYO", "TOOTH",
    "TORCH", "TOWER", "TRACK", "TRAIN", "TRIANGLE", "TRIP", "TRUNK", "TUBE", "TURKEY", "UNDERTAKER",
    "UNICORN", "VACUUM", "VAN", "VET", "WAKE", "WALL", "WAR", "WASHER", "WASHINGTON", "WATCH",
    "WATER", "WAVE", "WEB", "WELL", "WHALE", "WHIP", "WIND", "WITCH", "WORM", "YARD",
];

static WORDS_CS: &[&str] = &[
    "AFRIKA", "AGENT", "VZDUCH", "MIMOZEMŠŤAN", "ALPY", "AMAZON", "SANITKA", "AMERIKA", "ANDĚL", "ANTARKTIDA",
    "JABLKO", "PAŽE", "ATLANTIDA", "AUSTRÁLIE", "AZTÉKOVÉ", "ZÁDA", "MÍČ", "KAPELA", "BANKA", "BAR",
    "KŮRA", "NETOPÝR", "BATERIE", "PLÁŽ", "MEDVĚD", "RYTMUS", "POSTEL", "PEKING", "ZVONEK", "PÁSEK",
    "BERLÍN", "BERMUDY", "BOBULE", "ÚČET", "BLOK", "DESKA", "ŠROUB", "BOMBA", "BOND", "VÝBUCH",
    "BOTA", "LÁHEV", "LUK", "KRABICE", "MOST", "KARTÁČ", "DOLAR", "BUVOL", "CHYBA", "POLNICE",
    "TLAČÍTKO", "TELE", "KANADA", "ČEPICE", "HLAVNÍ MĚSTO", "AUTO", "KARTA", "MRKEV", "KASINO", "OBSAZENÍ",
    "KOČKA", "CELA", "KENTAUR", "STŘED", "ŽIDLE", "ZMĚNA", "NABITÍ", "ŠEK", "HRUĎ", "KUŘE",
    "ČÍNA", "ČOKOLÁDA", "KOSTEL", "KRUH", "ÚTES", "PLÁŠŤ", "KLUB", "KÓD", "ZIMA", "KOMIKS",
    "SLOŽENINA", "KONCERT", "DIRIGENT", "SMLOUVA", "KUCHAŘ", "MĚĎ", "BAVLNA", "SOUD", "PŘEBAL", "JEŘÁB",
    "HAVÁRIE", "KRIKET", "KŘÍŽ", "KORUNA", "KOLO", "ČESKO", "TANEC", "DATUM", "DEN", "SMRT",
    "PALUBA", "STUPEŇ", "DIAMANT", "KOSTKY", "DINOSAURUS", "NEMOC", "DOKTOR", "PES", "NÁVRH", "DRAK",
    "ŠATY", "VRTAČKA", "KAPKA", "KACHNA", "TRPASLÍK", "OREL", "EGYPT", "AMBASÁDA", "MOTOR", "ANGLIE",
    "EVROPA", "OKO", "OBLIČEJ", "TRH", "PODZIM", "FANOUŠEK", "PLOT", "POLE", "BOJOVNÍK", "POSTAVA",
    "SOUBOR", "FILM", "OHEŇ", "RYBA", "FLÉTNA", "MOUCHA", "NOHA", "SÍLA", "LES", "VIDLIČKA",
    "FRANCIE", "HRA", "PLYN", "GÉNIUS", "NĚMECKO", "DUCH", "OBŘÍ", "SKLO", "RUKAVICE", "ZLATO",
    "MILOST", "TRÁVA", "ŘECKO", "ZELENÝ", "ZEMĚ", "ŠUNKA", "RUKA", "JESTŘÁB", "HLAVA", "SRDCE",
    "HELIKOPTÉRA", "HIMALÁJE", "DÍRA", "HOLLYWOOD", "MED", "KAPUCE", "HÁK", "ROH", "KŮŇ", "PODKOVA",
    "NEMOCNICE", "HOTEL", "LED", "ZMRZLINA", "INDIE", "ŽELEZO", "SLONOVÍNA", "KLUK", "DŽEM", "TRYSKÁČ",
    "JUPITER", "KLOKAN", "KEČUP", "KLÍČ", "DÍTĚ", "KRÁL", "KIWI", "NŮŽ", "RYTÍŘ", "LAB",
    "KLÍN", "LASER", "PRÁVNÍK", "OLOVO", "CITRÓN", "SKŘÍTEK", "ŽIVOT", "SVĚTLO", "LIMUZÍNA", "LINKA",
    "ODKAZ", "LEV", "ODPADKY", "LOCH NESS", "ZÁMEK", "POLENO", "LONDÝN", "ŠTĚSTÍ", "POŠTA", "MAMUT",
    "JAVOR", "MRAMOR", "BŘEZEN", "HMOTA", "ZÁPAS", "MERKUR", "MEXIKO", "MIKROSKOP", "MILIONÁŘ", "DŮL",
    "MÁTA", "RAKETA", "MODEL", "KRTEK", "MĚSÍC", "MOSKVA", "HORA", "MYŠ", "ÚSTA", "HRNEK",
    "HŘEBÍK", "JEHLA", "SÍŤ", "NEW YORK", "NOC", "NINJA", "POZNÁMKA", "ROMÁN", "ZDRAVOTNÍ SESTRA", "OŘECH",
    "CHOBOTNICE", "OLEJ", "OLIVA", "OLYMP", "OPERA", "POMERANČ", "VARHANY", "DLAŇ", "PÁNEV", "KALHOTY",
    "PAPÍR", "PADÁK", "PARK", "ČÁST", "PRŮCHOD", "PASTA", "TUČŇÁK", "FÉNIX", "KLAVÍR", "KOLÁČ",
    "PILOT", "ŠPENDLÍK", "DÝMKA", "PIRÁT", "PISTOLE", "JÁM", "HŘIŠTĚ", "LETADLO", "PLAST", "TALÍŘ",
    "PTAKOPYSK", "HRA", "DĚJ", "BOD", "JED", "TYČE", "POLICIE", "BAZÉN", "PŘÍSTAV", "POŠTA",
    "LIBRA", "TISK", "PRINCEZNA", "DÝNĚ", "ŽÁČEK", "PYRAMIDA", "KRÁLOVNA", "KRÁLÍK", "RAKETA", "PAPRSEK",
    "REVOLUCE", "KRUH", "ROBIN", "ROBOT", "SKÁLA", "ŘÍM", "KOŘEN", "RŮŽE", "RULETA", "KOLO",
    "ŘADA", "PRAVÍTKO", "SATELIT", "SATURN", "VÁHA", "ŠKOLA", "VĚDEC", "ŠTÍR", "OBRAZOVKA", "POTÁPĚČ",
    "TULEŇ", "SERVER", "STÍN", "SHAKESPEARE", "ŽRALOK", "LOĎ", "BOTA", "OBCHOD", "VÝSTŘEL", "DŘEZ",
    "MRAKODRAP", "SKLUZ", "SLIMÁK", "PAŠERÁK", "SNÍH", "SNĚHULÁK", "PONOŽKA", "VOJÁK", "DUŠE", "ZVUK",
    "VESMÍR", "KOUZLO", "PAVOUK", "HŘEB", "PÁTEŘ", "MÍSTO", "JARO", "ŠPION", "ČTVEREC", "STADION",
    "PERSONÁL", "HVĚZDA", "STÁT", "TYČ", "AKCIE", "BRČKO", "POTOK", "STÁVKA", "ŠŇŮRA", "PONORKA",
    "OBLEK", "SUPERHRDINA", "HOUPAČKA", "SPÍNAČ", "STŮL", "TABLET", "ZNAČKA", "OCAS", "KOHOUTEK", "UČITEL",
    "TELESKOP", "CHRÁM", "DIVADLO", "ZLODĚJ", "PALEC", "KLÍŠTĚ", "KRAVATA", "ČAS", "TOKIO", "ZUB",
    "POCHODEŇ", "VĚŽ", "STOPA", "VLAK", "TROJÚHELNÍK", "VÝLET", "KUFR", "TRUBKA", "TURECKO", "POHŘEBNÍK",
    "JEDNOROŽEC", "VYSAVAČ", "DODÁVKA", "VETERINÁŘ", "PROBUZENÍ", "ZEĎ", "VÁLKA", "PRAČKA", "WASHINGTON", "HODINKY",
    "VODA", "VLNA", "PAVUČINA", "STUDNA", "VELRYBA", "BIČ", "VÍTR", "ČARODĚJNICE", "ČERV", "DVŮR",
];
