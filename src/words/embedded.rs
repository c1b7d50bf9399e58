//! Embedded default dictionary
//!
//! A five-letter word list compiled into the binary so the game runs
//! without any external files. A custom list can still be supplied with
//! the `--wordlist` flag.

/// Default five-letter words, uppercase, one entry per word
pub const WORDS: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ADOPT", "AGENT", "AGREE", "ALLOY", "ALONE", "ALTER", "ANGEL",
    "ANGER", "APPLE", "ARENA", "ARGUE", "ARISE", "AUDIO", "AWARE", "BADGE", "BAKER", "BASIC",
    "BEACH", "BEGIN", "BENCH", "BLACK", "BLADE", "BLAME", "BLANK", "BLAST", "BLAZE", "BLEND",
    "BLOCK", "BOARD", "BRAIN", "BREAD", "BREAK", "BRICK", "BRIDE", "BRIEF", "BROWN", "BUILD",
    "CABLE", "CANDY", "CARGO", "CATCH", "CAUSE", "CHAIN", "CHAIR", "CHALK", "CHARM", "CHART",
    "CHASE", "CHEAP", "CHECK", "CHESS", "CHEST", "CHIEF", "CHILD", "CIVIC", "CLAIM", "CLEAN",
    "CLEAR", "CLIMB", "CLOCK", "CLOSE", "CLOUD", "COACH", "COAST", "COUNT", "COURT", "COVER",
    "CRAFT", "CRANE", "CRASH", "CREAM", "CRIME", "CROWD", "CROWN", "CURVE", "DAILY", "DANCE",
    "DEALT", "DEATH", "DELAY", "DEPTH", "DOUBT", "DOZEN", "DRAFT", "DRAIN", "DRAMA", "DREAM",
    "DRESS", "DRINK", "DRIVE", "EAGER", "EARLY", "EARTH", "EIGHT", "ELECT", "EMPTY", "ENJOY",
    "ENTER", "EQUAL", "ERASE", "ERROR", "EVENT", "EXACT", "EXIST", "FAITH", "FALSE", "FANCY",
    "FAULT", "FEAST", "FENCE", "FIBER", "FIELD", "FIFTY", "FIGHT", "FINAL", "FIRST", "FLAME",
    "FLASH", "FLEET", "FLOOR", "FLOUR", "FOCUS", "FORCE", "FORGE", "FORTH", "FORTY", "FORUM",
    "FRAME", "FRESH", "FRONT", "FROST", "FRUIT", "GIANT", "GLASS", "GLOBE", "GLORY", "GRACE",
    "GRADE", "GRAIN", "GRAND", "GRANT", "GRAPE", "GRASS", "GREAT", "GREEN", "GROUP", "GUARD",
    "GUESS", "GUEST", "GUIDE", "HAPPY", "HEART", "HEAVY", "HELLO", "HONEY", "HORSE", "HOTEL",
    "HOUSE", "HUMAN", "IDEAL", "IMAGE", "INDEX", "INNER", "INPUT", "ISSUE", "JOINT", "JUDGE",
    "JUICE", "KNIFE", "KNOCK", "LABEL", "LARGE", "LASER", "LAUGH", "LAYER", "LEARN", "LEAST",
    "LEAVE", "LEGAL", "LEMON", "LEVEL", "LIGHT", "LIMIT", "LLAMA", "LOCAL", "LOGIC", "LOOSE",
    "LOYAL", "LUCKY", "LUNCH", "MAGIC", "MAJOR", "MAPLE", "MARCH", "MATCH", "MAYBE", "MEDAL",
    "MEDIA", "METAL", "MINOR", "MODEL", "MONEY", "MONTH", "MORAL", "MOTOR", "MOUNT", "MOUSE",
    "MOUTH", "MUSIC", "NERVE", "NEVER", "NIGHT", "NOBLE", "NOISE", "NORTH", "NOVEL", "NURSE",
    "OCEAN", "OFFER", "OLIVE", "ONION", "ORDER", "OTHER", "OUGHT", "OUTER", "OWNER", "PAINT",
    "PANEL", "PAPER", "PARTY", "PEACE", "PHONE", "PIANO", "PIECE", "PILOT", "PITCH", "PLACE",
    "PLAIN", "PLANE", "PLANT", "PLATE", "POINT", "POUND", "POWER", "PRESS", "PRICE", "PRIDE",
    "PRIME", "PRINT", "PRIZE", "PROOF", "PROUD", "QUEEN", "QUICK", "QUIET", "QUOTE", "RADIO",
    "RAISE", "RANGE", "RAPID", "RATIO", "REACH", "REACT", "READY", "REALM", "REBEL", "REFER",
    "RIGHT", "RIVAL", "RIVER", "ROAST", "ROBOT", "ROUGH", "ROUND", "ROUTE", "ROYAL", "RURAL",
    "SCALE", "SCENE", "SCOPE", "SCORE", "SENSE", "SERVE", "SEVEN", "SHADE", "SHAKE", "SHAPE",
    "SHARE", "SHARP", "SHEEP", "SHEET", "SHELF", "SHELL", "SHIFT", "SHINE", "SHIRT", "SHOCK",
    "SHORE", "SHORT", "SIGHT", "SKILL", "SLATE", "SLEEP", "SLICE", "SMALL", "SMART", "SMILE",
    "SMOKE", "SOLAR", "SOLID", "SOUND", "SOUTH", "SPACE", "SPARE", "SPEAK", "SPEED", "SPEND",
    "SPICE", "SPLIT", "SPORT", "STAFF", "STAGE", "STAIR", "STAND", "START", "STATE", "STEAM",
    "STEEL", "STICK", "STILL", "STOCK", "STONE", "STORE", "STORM", "STORY", "STRIP", "STUDY",
    "STYLE", "SUGAR", "SUITE", "SUPER", "SWEET", "TABLE", "TASTE", "TEACH", "THANK", "THEME",
    "THERE", "THICK", "THING", "THINK", "THIRD", "THOSE", "THREE", "THUMB", "TIGER", "TIMER",
    "TITLE", "TODAY", "TOKEN", "TOPIC", "TOTAL", "TOUCH", "TOUGH", "TOWER", "TRACK", "TRADE",
    "TRAIL", "TRAIN", "TREAT", "TREND", "TRIAL", "TRUCK", "TRULY", "TRUST", "TRUTH", "TWICE",
    "UNCLE", "UNDER", "UNION", "UNITY", "UPPER", "URBAN", "USAGE", "USUAL", "VALID", "VALUE",
    "VIDEO", "VISIT", "VITAL", "VOICE", "WASTE", "WATCH", "WATER", "WHEAT", "WHEEL", "WHERE",
    "WHICH", "WHILE", "WHITE", "WHOLE", "WORLD", "WORRY", "WORTH", "WOUND", "WRITE", "WRONG",
    "YIELD", "YOUNG", "YOUTH",
];
