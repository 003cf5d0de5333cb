//! Built-in course catalogue inserted on first start.

use ludo_core::level::CourseLevel;
use ludo_core::quiz::QuestionType;
use ludo_core::quiz::QuestionType::{FillGap, Listening, MultipleChoice, Translate, TrueFalse};

pub struct SeedCourse {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub language_code: &'static str,
    pub level: CourseLevel,
    pub color_hex: &'static str,
    pub lessons: &'static [SeedLesson],
}

pub struct SeedLesson {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub order: i32,
    pub questions: &'static [SeedQuestion],
}

pub struct SeedQuestion {
    pub kind: QuestionType,
    pub instruction: &'static str,
    pub statement: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: &'static str,
    pub order: i32,
}

const fn q(
    kind: QuestionType,
    instruction: &'static str,
    statement: &'static str,
    options: &'static [&'static str],
    correct_answer: &'static str,
    order: i32,
) -> SeedQuestion {
    SeedQuestion {
        kind,
        instruction,
        statement,
        options,
        correct_answer,
        order,
    }
}

pub const COURSES: &[SeedCourse] = &[
    SeedCourse {
        slug: "c1",
        title: "Anglais - Découverte",
        description: "Découvrez les bases de l'anglais",
        language_code: "en",
        level: CourseLevel::Beginner,
        color_hex: "0xFF58CC02",
        lessons: &[
            SeedLesson {
                slug: "lesson_basics_1",
                title: "Bases : Salutations",
                description: "Apprenez à dire bonjour",
                order: 1,
                questions: &[
                    q(
                        Translate,
                        "Traduisez cette phrase",
                        "Hello, I am Duo.",
                        &[
                            "Bonjour", ",", "je", "suis", "Duo", "chat", "mange", "rouge",
                        ],
                        "Bonjour , je suis Duo",
                        1,
                    ),
                    q(
                        MultipleChoice,
                        "Comment dit-on 'Garçon' ?",
                        "",
                        &["Boy", "Girl", "Apple", "Car"],
                        "Boy",
                        2,
                    ),
                    q(
                        FillGap,
                        "Complétez la phrase",
                        "I ____ a student.",
                        &[],
                        "am",
                        3,
                    ),
                    q(
                        Listening,
                        "Écrivez ce que vous entendez",
                        "",
                        &[],
                        "Hello",
                        4,
                    ),
                    q(
                        TrueFalse,
                        "Vrai ou Faux ?",
                        "Good night = Bonjour",
                        &["Vrai", "Faux"],
                        "Faux",
                        5,
                    ),
                ],
            },
            SeedLesson {
                slug: "lesson_food_1",
                title: "Nourriture",
                description: "Miam miam",
                order: 2,
                questions: &[
                    q(
                        Translate,
                        "Traduisez",
                        "I eat an apple.",
                        &["Je", "mange", "une", "pomme", "bois", "eau", "la"],
                        "Je mange une pomme",
                        1,
                    ),
                    q(
                        MultipleChoice,
                        "Que buvez-vous le matin ?",
                        "Coffee",
                        &["Coffee", "Bread", "Cheese", "Meat"],
                        "Coffee",
                        2,
                    ),
                    q(FillGap, "Complétez", "She ____ water.", &[], "drinks", 3),
                    q(
                        Translate,
                        "Traduisez",
                        "The bread is good.",
                        &["Le", "pain", "est", "bon", "mauvais", "lait", "sel"],
                        "Le pain est bon",
                        4,
                    ),
                ],
            },
            SeedLesson {
                slug: "lesson_animals_1",
                title: "Animaux",
                description: "Nos amis les bêtes",
                order: 3,
                questions: &[
                    q(
                        MultipleChoice,
                        "Quel animal aboie ?",
                        "Dog",
                        &["Cat", "Dog", "Bird", "Fish"],
                        "Dog",
                        1,
                    ),
                    q(
                        Translate,
                        "Traduisez",
                        "The cat is black.",
                        &["Le", "chat", "est", "noir", "blanc", "chien", "souris"],
                        "Le chat est noir",
                        2,
                    ),
                    q(
                        TrueFalse,
                        "Vrai ou Faux ?",
                        "Bird = Oiseau",
                        &["Vrai", "Faux"],
                        "Vrai",
                        3,
                    ),
                ],
            },
        ],
    },
    SeedCourse {
        slug: "c2",
        title: "Anglais - Voyage",
        description: "Gérer ses déplacements",
        language_code: "en",
        level: CourseLevel::Intermediate,
        color_hex: "0xFFCE82FF",
        lessons: &[
            SeedLesson {
                slug: "lesson_travel_1",
                title: "Aéroport",
                description: "Prêt au décollage",
                order: 1,
                questions: &[
                    q(
                        Translate,
                        "Traduisez",
                        "Where is the passport?",
                        &["Où", "est", "le", "passeport", "mon", "ton", "valise", "?"],
                        "Où est le passeport ?",
                        1,
                    ),
                    q(
                        MultipleChoice,
                        "Choisissez la bonne réponse",
                        "Here is your boarding pass.",
                        &["Thank you", "I am sorry", "Good night", "Apple"],
                        "Thank you",
                        2,
                    ),
                    q(
                        FillGap,
                        "Complétez",
                        "The flight is ____ time.",
                        &[],
                        "on",
                        3,
                    ),
                    q(
                        Translate,
                        "Traduisez",
                        "I need a taxi.",
                        &["J'ai", "besoin", "d'un", "taxi", "bus", "train", "vélo"],
                        "J'ai besoin d'un taxi",
                        4,
                    ),
                ],
            },
            SeedLesson {
                slug: "lesson_travel_2",
                title: "Directions",
                description: "Ne vous perdez pas",
                order: 2,
                questions: &[
                    q(
                        MultipleChoice,
                        "Où est la banque ?",
                        "Where is the bank?",
                        &[
                            "It is on the left",
                            "It is a fruit",
                            "My name is Duo",
                            "Yes",
                        ],
                        "It is on the left",
                        1,
                    ),
                    q(
                        FillGap,
                        "Complétez",
                        "Turn ____ at the corner.",
                        &[],
                        "right",
                        2,
                    ),
                ],
            },
        ],
    },
    SeedCourse {
        slug: "c3",
        title: "Anglais - Pro",
        description: "Le monde du travail",
        language_code: "en",
        level: CourseLevel::Advanced,
        color_hex: "0xFFFF9600",
        lessons: &[SeedLesson {
            slug: "lesson_pro_1",
            title: "Réunion",
            description: "Business is business",
            order: 1,
            questions: &[
                q(
                    Translate,
                    "Traduisez",
                    "We need to schedule a meeting.",
                    &[
                        "Nous",
                        "devons",
                        "planifier",
                        "une",
                        "réunion",
                        "manger",
                        "dormir",
                        "chat",
                    ],
                    "Nous devons planifier une réunion",
                    1,
                ),
                q(
                    TrueFalse,
                    "Is this professional?",
                    "Yo, wassup boss?",
                    &["Yes", "No"],
                    "No",
                    2,
                ),
                q(
                    MultipleChoice,
                    "Choose the best closing",
                    "Email closing",
                    &["Best regards", "Love you", "See ya", "Bye"],
                    "Best regards",
                    3,
                ),
            ],
        }],
    },
    // Placement course: the only course tagged UNKNOWN.
    SeedCourse {
        slug: "placement",
        title: "Placement",
        description: "Test de niveau",
        language_code: "en",
        level: CourseLevel::Unknown,
        color_hex: "0xFFFFFFFF",
        lessons: &[SeedLesson {
            slug: "placement_test",
            title: "Test de niveau",
            description: "Évaluez votre niveau",
            order: 1,
            questions: &[
                q(
                    Translate,
                    "Traduisez",
                    "Hello",
                    &["Bonjour", "Au revoir", "Chat"],
                    "Bonjour",
                    1,
                ),
                q(
                    MultipleChoice,
                    "Choose the correct word",
                    "I ____ a student",
                    &["am", "is", "are"],
                    "am",
                    2,
                ),
                q(
                    Translate,
                    "Traduisez",
                    "I need a taxi",
                    &[
                        "J'ai", "besoin", "d'un", "taxi", "Je", "veux", "un", "taxi", "Taxi",
                    ],
                    "J'ai besoin d'un taxi",
                    3,
                ),
            ],
        }],
    },
];

/// Languages offered to learners: `(code, name)`.
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("ja", "Japanese")];

/// Starter vocabulary: `(language, word, translation, level)`.
pub const VOCABULARY: &[(&str, &str, &str, i32)] = &[
    ("en", "hello", "bonjour", 1),
    ("en", "goodbye", "au revoir", 1),
    ("en", "yes", "oui", 1),
    ("en", "no", "non", 1),
    ("en", "thank you", "merci", 1),
    ("en", "boy", "garçon", 1),
    ("en", "girl", "fille", 1),
    ("en", "apple", "pomme", 1),
    ("en", "bread", "pain", 1),
    ("en", "water", "eau", 1),
    ("en", "cat", "chat", 1),
    ("en", "dog", "chien", 1),
    ("en", "bird", "oiseau", 1),
    ("en", "passport", "passeport", 2),
    ("en", "suitcase", "valise", 2),
    ("en", "flight", "vol", 2),
    ("en", "left", "gauche", 2),
    ("en", "right", "droite", 2),
    ("en", "corner", "coin", 2),
    ("en", "bank", "banque", 2),
    ("en", "meeting", "réunion", 3),
    ("en", "schedule", "planifier", 3),
    ("en", "regards", "salutations", 3),
    ("en", "deadline", "échéance", 3),
];

/// Where audio clips for a vocabulary word are served from.
pub fn audio_url(language_code: &str, word: &str) -> String {
    format!("/audio/{language_code}/{}.mp3", word.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_are_unique() {
        let mut courses = HashSet::new();
        let mut lessons = HashSet::new();
        for course in COURSES {
            assert!(courses.insert(course.slug), "duplicate {}", course.slug);
            for lesson in course.lessons {
                assert!(lessons.insert(lesson.slug), "duplicate {}", lesson.slug);
            }
        }
    }

    #[test]
    fn question_orders_are_strictly_increasing() {
        for lesson in COURSES.iter().flat_map(|c| c.lessons) {
            let orders: Vec<i32> = lesson.questions.iter().map(|q| q.order).collect();
            assert!(
                orders.windows(2).all(|w| w[0] < w[1]),
                "lesson {} has unordered questions",
                lesson.slug
            );
        }
    }

    #[test]
    fn correct_answer_is_offered_for_choice_questions() {
        for question in COURSES
            .iter()
            .flat_map(|c| c.lessons)
            .flat_map(|l| l.questions)
            .filter(|q| matches!(q.kind, MultipleChoice | TrueFalse))
        {
            assert!(
                question.options.contains(&question.correct_answer),
                "'{}' missing from options",
                question.correct_answer
            );
        }
    }

    #[test]
    fn exactly_one_placement_course() {
        let placement: Vec<_> = COURSES
            .iter()
            .filter(|c| c.level == CourseLevel::Unknown)
            .collect();
        assert_eq!(placement.len(), 1);
        assert_eq!(placement[0].slug, "placement");
    }

    #[test]
    fn vocabulary_languages_are_seeded() {
        let codes: HashSet<_> = LANGUAGES.iter().map(|(code, _)| *code).collect();
        assert!(VOCABULARY.iter().all(|(code, ..)| codes.contains(code)));
    }

    #[test]
    fn audio_url_replaces_spaces() {
        assert_eq!(audio_url("en", "thank you"), "/audio/en/thank_you.mp3");
    }
}
