//! Built-in content-warning categories and their trigger phrases.
//!
//! Phrase lists are stored as written; [`Taxonomy::builtin`](super::Taxonomy::builtin)
//! lowercases them at load time. Phrases may repeat across categories on purpose
//! (e.g. "abuse" under several headings) and are never collapsed.

/// Category name paired with its trigger phrases.
pub(super) const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Animal Abuse",
        &[
            "animal", "cruelty", "neglect", "harm", "suffering", "mistreatment", "abuse",
            "beating", "starvation", "malnourishment", "torment", "torture", "maltreat",
            "exploit", "kill", "slaughter", "poach", "trap", "experiment", "hunt", "cage",
            "abandon", "discard", "pain", "whip", "shoot", "confine", "enslave", "skin", "fur",
            "endanger", "bait", "bleed", "choke", "crush", "misuse", "overwork", "punish",
            "scar", "shock", "strangle", "wound", "maim", "disfigure", "mutilate",
            "vivisection", "imprisoned", "lab animal", "chained", "caged", "trafficked",
            "illegal trade", "baiting", "fight", "abusement park", "entertainment", "circuses",
            "rodeo", "farming", "fur trade", "leather", "cosmetic testing", "laboratory",
            "breed", "overbreed", "pet mill", "racing", "gamblers", "breeders", "euthanize",
            "abandoned", "stray", "wildlife", "marine life",
        ],
    ),
    (
        "Sexual Violence",
        &[
            "rape", "molestation", "sexual assault", "non-consensual", "nonconsensual",
            "harassment", "grope", "abuse", "forced", "attack", "inappropriate", "unwanted",
            "exploit", "violate", "coerce", "intimidate", "threaten", "predator", "offender",
            "consent", "groom", "stalk", "unsolicited", "touch", "fear", "trauma", "victim",
            "traumatize", "vulnerable", "invasion", "violation", "indecent", "forceful",
            "abusive relationship", "manipulation", "intimate violence", "uninvited", "molest",
            "statutory", "silence", "hush", "date rape", "drugged", "power", "control",
            "cyber", "explicit", "sexting", "blackmail", "shaming", "exploitation",
            "revenge porn", "intimate threat", "exposure", "uncomfortable", "unsafe", "minor",
            "child", "elderly", "defenseless",
        ],
    ),
    (
        "Body Image/Disordered Eating",
        &[
            "body image", "eating disorder", "anorexia", "bulimia", "body dysmorphia", "binge",
            "starvation", "diet", "thin", "fat", "overeating", "weight", "obesity",
            "underweight", "purge", "restriction", "calorie", "fast", "unhealthy", "mirror",
            "self-worth", "appearance", "pressure", "ideal", "size", "dieting", "body shaming",
            "self-conscious", "perfection", "body dissatisfaction", "exercise", "obsession",
            "orthorexia", "laxatives", "diuretics", "body checking", "guilt", "shame",
            "control", "image", "food fear", "compulsive", "scale", "weight gain",
            "weight loss", "muscle", "toning", "fitness", "skinny", "plump", "heavy", "light",
            "self-esteem", "self-hate", "mirror check", "avoidance", "pinch", "measure",
            "waist", "BMI", "comparison",
        ],
    ),
    (
        "Self-Harm/Suicide",
        &[
            "self-harm", "suicide", "cutting", "overdose", "self-inflict", "end life",
            "attempt", "despair", "hopelessness", "pain", "wrist", "bleed", "scars", "burn",
            "jump", "hang", "suffocate", "cry", "lonely", "depressed", "worthless", "numb",
            "lost", "void", "struggle", "isolation", "helplessness", "grieve", "self-loathing",
            "suicidal thoughts", "ideation", "death wish", "razor", "pills", "intoxication",
            "sadness", "sorrow", "self-punishment", "self-destructive", "darkness",
            "emptiness", "rope", "bridge", "height", "firearm", "blade", "cutting tool", "gas",
            "drowning", "substance", "ingest", "alcohol", "method", "means", "lethality",
            "intent", "crisis", "hotline",
        ],
    ),
    (
        "Discrimination/Hate Crimes",
        &[
            "discrimination", "racism", "homophobia", "sexism", "hate crime", "prejudice",
            "bigotry", "intolerance", "xenophobia", "bias", "stereotype", "slur",
            "discriminate", "marginalize", "oppress", "minority", "inequality", "unfair",
            "segregation", "racist", "sexist", "bigot", "prejudiced", "hateful", "derogatory",
            "injustice", "persecute", "isolate", "alienate", "ostracize", "scapegoat",
            "gender bias", "ethnicity", "nationality", "caste", "class", "religious",
            "anti-Semitism", "Islamophobia", "disability", "ageism", "LGBTQ+",
            "gender identity", "transphobia", "colorism", "microaggressions", "supremacy",
            "radical", "extremist", "bias-motivated", "targeted", "offense", "vandalism",
            "symbol", "hate speech", "propaganda",
        ],
    ),
    (
        "Violence & Graphic Content",
        &[
            "violence", "graphic", "gore", "brutal", "vicious", "blood", "wound", "injury",
            "attack", "hurt", "punch", "stab", "hit", "fight", "assault", "battle", "conflict",
            "terror", "shock", "horror", "aggression", "intense", "disturb", "trauma",
            "frighten", "scar", "fear", "threat", "danger", "menace", "brawl", "riot",
            "massacre", "ambush", "explosive", "bomb", "firearm", "weapon", "gunshot",
            "combat", "warfare", "sadism", "torture", "mutilation", "decapitation",
            "beheading", "suffering", "pain", "traumatic", "scarring", "nightmare",
            "terrorize", "harm", "damage", "intimidation", "coercion",
        ],
    ),
    (
        "Substance Abuse/Addiction",
        &[
            "drugs", "drug use", "substance abuse", "narcotics", "overdose", "addiction",
            "dependence", "heroin", "cocaine", "methamphetamine", "crystal meth",
            "amphetamine", "speed", "ecstasy", "MDMA", "marijuana", "weed", "pot", "cannabis",
            "THC", "CBD", "psychedelics", "LSD", "acid", "magic mushrooms", "psilocybin",
            "opioids", "opiates", "painkillers", "morphine", "codeine", "benzodiazepines",
            "valium", "xanax", "alcohol", "alcoholism", "drinking", "intoxication", "tobacco",
            "smoking", "cigarettes", "nicotine", "inhalants", "huffing", "prescription drugs",
            "pharmaceutical abuse", "caffeine", "energy drinks", "coffee addiction",
            "anabolic steroids", "barbiturates", "sedatives", "hallucinogens", "PCP",
            "ketamine", "binge drinking", "drunk", "hangover", "rehab", "rehabilitation",
            "detox", "withdrawal",
        ],
    ),
    (
        "Child Abuse/Domestic Violence",
        &[
            "child abuse", "domestic violence", "molestation", "beating", "hurt", "neglect",
            "exploit", "trauma", "emotional abuse", "verbal abuse", "physical abuse",
            "bullying", "endanger", "child labor", "trafficking", "kidnap", "abandon", "fear",
            "threat", "intimidate", "victim", "vulnerable", "protective services", "shelter",
            "coercion", "manipulate", "dominate", "control", "isolation", "aggressor",
            "batterer", "offender", "assault", "bruise", "injury", "scar", "harm", "abuser",
            "perpetrator", "childhood trauma", "custody", "violation", "power", "intimidation",
            "dependency", "escape", "survivor", "restraint", "punishment", "silent", "witness",
            "rescue", "report", "intervention", "counseling", "therapy", "recovery",
            "guardian", "broken home", "toxic", "unsafe", "threaten", "menace", "torment",
            "dysfunctional", "parent",
        ],
    ),
    (
        "Homicide/Gun Violence",
        &[
            "murder", "homicide", "gunshot", "shooting", "kill", "death", "assassination",
            "slaughter", "massacre", "victim", "shooter", "gunman", "firearm", "bullet",
            "weapon", "fatal", "deadly", "ambush", "sniper", "gang violence", "drive-by",
            "murderer", "assailant", "harm", "threat", "armed", "pistol", "rifle",
            "semi-automatic", "assault rifle", "machine gun", "ammo", "ammunition", "casualty",
            "crime scene", "forensic", "detective", "investigation", "vengeance", "revenge",
            "bloodshed", "trigger", "motive", "premeditated", "malice", "aforethought",
            "injury", "intentional", "cold-blooded", "violent", "manslaughter", "execution",
            "crime rate", "gang-related", "vendetta", "feud", "hostility", "aggression",
            "retaliation", "bloodthirsty", "gun control", "legislation", "concealed carry",
            "standoff", "altercation",
        ],
    ),
];
