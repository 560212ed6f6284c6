//! Fixed sampling pools consumed by the generator.
//!
//! All draws from these pools are uniform; weighted draws live in
//! `generator::sampler` next to the weight vectors they belong to.

/// First-name pool for synthesized players.
pub const FIRST_NAMES: &[&str] = &[
    "Marcus", "Jamal", "Tyler", "Brandon", "Cameron", "Derek", "Justin", "Kyle", "Ryan", "Aaron",
    "Josh", "Matt", "Tom", "Drew", "Patrick", "Russell", "Dak", "Jalen", "Lamar", "Joe",
    "Trevor", "Tua", "Mac", "Zach", "Davis", "Christian", "Nick", "Cooper", "Davante", "Stefon",
    "DeAndre", "Tyreek", "Mike", "Chris", "DK", "Terry", "CeeDee", "Jaylen", "AJ", "Deebo",
    "Travis", "George", "Mark", "Darren", "TJ", "Micah", "Myles", "Maxx", "Quinnen", "Dexter",
    "Javon", "Rashan", "Montez", "Roquan", "Fred", "Tremaine", "Bobby", "CJ", "Shaquille",
    "Jaire", "Sauce", "Trevon", "Marshon", "Carlton", "Denzel", "Jaycee", "Derwin", "Jessie",
    "Minkah", "Antoine", "Kevin", "Harrison", "Quentin", "Jordan",
];

/// Last-name pool for synthesized players.
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis",
    "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen",
    "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
    "Mitchell", "Carter", "Roberts", "Turner", "Phillips", "Parker", "Evans", "Edwards",
    "Collins", "Stewart", "Morris", "Rogers", "Reed", "Cook", "Morgan", "Bell", "Murphy",
    "Bailey", "Cooper", "Richardson", "Cox", "Howard", "Ward", "Peterson", "Gray", "Ramirez",
    "James", "Watson", "Brooks", "Sanders", "Price", "Bennett", "Wood", "Barnes", "Ross",
    "Henderson",
];

/// College pool for demographic synthesis.
pub const COLLEGES: &[&str] = &[
    "Alabama", "Ohio State", "Georgia", "LSU", "Clemson", "Michigan", "Oklahoma", "Texas",
    "USC", "Florida", "Florida State", "Penn State", "Notre Dame", "Oregon", "Auburn",
    "Texas A&M", "Miami", "Tennessee", "Wisconsin", "Stanford", "Washington", "Iowa",
    "Nebraska", "UCLA", "North Carolina", "Virginia Tech",
];

/// Body-part pool (also the column domain of the classification matrix).
pub const BODY_PARTS: &[&str] = &[
    "Head", "Neck", "Shoulder", "Arm", "Elbow", "Wrist", "Hand", "Back", "Hip", "Groin",
    "Quad", "Hamstring", "Knee", "Ankle", "Foot",
];

/// Mechanism-of-injury tokens (normalized for filtering).
pub const MECHANISMS: &[&str] = &["contact", "non-contact", "overuse", "unknown"];

/// Contact-type tokens drawn only when the mechanism is "contact".
pub const CONTACT_TYPES: &[&str] =
    &["player-contact", "ground-contact", "equipment-contact", "no-contact"];

/// Sentinel contact type forced for every non-contact mechanism.
pub const NO_CONTACT: &str = "no-contact";

/// Season-type tokens.
pub const SEASON_TYPES: &[&str] = &["Regular", "Pre-season", "Post-season", "Off-season"];

/// Participation reasons.
pub const PARTICIPATION_REASONS: &[&str] = &[
    "In-game contact", "Training incident", "Non-contact strain", "Overuse", "Illness", "Other",
];

/// Clinical impression labels.
pub const CLINICAL_IMPRESSIONS: &[&str] = &[
    "Ear Staph Infection - MRSA",
    "Elbow Abrasion",
    "Elbow Fracture/Humerus/Epiphyseal",
    "Knee Concussion",
    "Shoulder Strain",
    "Ankle Sprain",
    "Hamstring Strain",
    "ACL Tear Anterior",
    "Concussion",
    "Lower Back Strain",
    "Hip Flexor Strain",
    "Quad Contusion",
    "MCL Sprain",
    "Other Injuries",
];
