//! Built-in example catalog: three subjects, three graded examples each.

use crate::errors::AppError;
use crate::library::ExampleLibrary;
use crate::models::example::{Difficulty, Example};

const MATHEMATICS_TEMPLATE: &str = r#"You are an expert mathematics tutor. Here are examples of how to help students with different types of math problems:

{EXAMPLES}

NOW SOLVE THIS PROBLEM USING THE MOST APPROPRIATE APPROACH FROM THE EXAMPLES:
Student Query: "{query}"
Student Level: {level}
Choose the example style that best matches the problem complexity and student level."#;

const SCIENCE_TEMPLATE: &str = r#"You are a science educator. Here are examples of how to explain different types of scientific concepts:

{EXAMPLES}

NOW EXPLAIN THIS CONCEPT USING THE MOST SUITABLE APPROACH FROM THE EXAMPLES:
Student Query: "{query}"
Student Level: {level}
Match your explanation style to the appropriate complexity level and student background."#;

const LITERATURE_TEMPLATE: &str = r#"You are a literature teacher. Here are examples of how to analyze different types of literary works:

{EXAMPLES}

NOW ANALYZE THIS LITERARY ELEMENT USING THE MOST APPROPRIATE APPROACH:
Student Query: "{query}"
Student Level: {level}
Select the analytical depth and approach that matches the student's academic level."#;

impl ExampleLibrary {
    /// The catalog shipped with the binary, used when no library file is configured.
    pub fn builtin() -> Result<Self, AppError> {
        let subjects = [
            ("mathematics", MATHEMATICS_TEMPLATE, mathematics_examples()),
            ("science", SCIENCE_TEMPLATE, science_examples()),
            ("literature", LITERATURE_TEMPLATE, literature_examples()),
        ];

        subjects
            .into_iter()
            .fold(ExampleLibrary::builder(), |builder, (name, template, examples)| {
                examples
                    .into_iter()
                    .fold(builder.subject(name, template), |b, example| {
                        b.example(name, example)
                    })
            })
            .build()
    }
}

fn example(
    id: &str,
    difficulty: Difficulty,
    level: &str,
    query: &str,
    concept: &str,
    approach: &str,
    response: &str,
) -> Example {
    Example {
        id: id.to_string(),
        difficulty,
        level: level.to_string(),
        query: query.to_string(),
        concept: concept.to_string(),
        approach: approach.to_string(),
        response: response.to_string(),
    }
}

fn mathematics_examples() -> Vec<Example> {
    vec![
        example(
            "math_basic_algebra",
            Difficulty::Basic,
            "8th Grade",
            "Solve 2x + 5 = 13",
            "Linear Equation (one variable)",
            "step-by-step isolation",
            r#"I'll help you solve this linear equation step by step.

**Problem**: 2x + 5 = 13
**Concept**: Linear Equation (one variable)
**Difficulty**: Basic

**Step-by-step Solution:**
1. **Subtract 5 from both sides**: 2x + 5 - 5 = 13 - 5
2. **Simplify**: 2x = 8
3. **Divide both sides by 2**: x = 4

**Verification**: 2(4) + 5 = 8 + 5 = 13 ✓
**Key Learning**: Always perform the same operation to both sides."#,
        ),
        example(
            "math_quadratic",
            Difficulty::Intermediate,
            "10th Grade",
            "Solve x² - 5x + 6 = 0",
            "Quadratic Equation (factoring method)",
            "factoring technique",
            r#"Let me show you how to solve this quadratic equation using factoring.

**Problem**: x² - 5x + 6 = 0
**Concept**: Quadratic Equation (factoring method)
**Difficulty**: Intermediate

**Step-by-step Solution:**
1. **Identify coefficients**: a=1, b=-5, c=6
2. **Find factors of 6 that add to -5**: -2 and -3
3. **Factor the equation**: (x - 2)(x - 3) = 0
4. **Solve each factor**: x - 2 = 0 → x = 2, x - 3 = 0 → x = 3

**Verification**: (2)² - 5(2) + 6 = 4 - 10 + 6 = 0 ✓
**Key Learning**: Look for factor pairs that multiply to 'c' and add to 'b'."#,
        ),
        example(
            "math_calculus",
            Difficulty::Advanced,
            "12th Grade",
            "Find the derivative of f(x) = 3x² + 2x - 1",
            "Derivatives using Power Rule",
            "power rule application",
            r#"I'll demonstrate the power rule for differentiation.

**Problem**: f(x) = 3x² + 2x - 1
**Concept**: Derivatives using Power Rule
**Difficulty**: Advanced

**Step-by-step Solution:**
1. **Apply power rule to each term**: d/dx[ax^n] = n·a·x^(n-1)
2. **First term**: d/dx[3x²] = 2·3·x^(2-1) = 6x
3. **Second term**: d/dx[2x] = 1·2·x^(1-1) = 2
4. **Third term**: d/dx[-1] = 0 (constant)
5. **Combine results**: f'(x) = 6x + 2

**Verification**: Check using limit definition or graphing calculator
**Key Learning**: Power rule is the foundation for polynomial differentiation."#,
        ),
    ]
}

fn science_examples() -> Vec<Example> {
    vec![
        example(
            "science_physics_basic",
            Difficulty::Basic,
            "9th Grade",
            "Why do objects fall at the same rate in a vacuum?",
            "Gravitational Acceleration in Vacuum",
            "conceptual explanation",
            r#"Let me explain this fundamental physics principle!

**Concept**: Gravitational Acceleration in Vacuum
**Subject Area**: Physics - Mechanics
**Complexity**: Foundational

**Simple Explanation:**
1. **Gravity's Universal Effect**: Earth pulls all objects with 9.8 m/s² acceleration
2. **Mass Independence**: Heavy and light objects fall equally fast
3. **Air Resistance Factor**: Normally slows lighter objects more
4. **Vacuum Conditions**: No air = no resistance = pure gravity

**Real-World Example**: Apollo 15 Moon experiment - hammer and feather fell together
**Why It Matters**: Foundation for understanding orbital mechanics and space travel
**Fun Fact**: Galileo first tested this at the Leaning Tower of Pisa!"#,
        ),
        example(
            "science_biology_intermediate",
            Difficulty::Intermediate,
            "10th Grade",
            "How does photosynthesis convert sunlight into energy?",
            "Photosynthesis - Light Energy Conversion",
            "process breakdown",
            r#"I'll break down this amazing biological process step by step.

**Concept**: Photosynthesis - Light Energy Conversion
**Subject Area**: Biology - Plant Processes
**Complexity**: Intermediate

**Process Breakdown:**
1. **Light Absorption**: Chlorophyll captures sunlight energy in leaves
2. **Water Splitting**: H₂O molecules break into hydrogen and oxygen
3. **Carbon Fixation**: CO₂ from air combines with hydrogen
4. **Sugar Production**: Glucose (C₆H₁₂O₆) forms as energy storage
5. **Oxygen Release**: O₂ released as beneficial byproduct

**Chemical Equation**: 6CO₂ + 6H₂O + light energy → C₆H₁₂O₆ + 6O₂
**Global Impact**: Produces oxygen we breathe and food for ecosystems
**Connection**: Foundation of all food chains on Earth"#,
        ),
        example(
            "science_molecular_advanced",
            Difficulty::Advanced,
            "12th Grade",
            "Explain how DNA replication ensures genetic accuracy",
            "DNA Replication Fidelity Mechanisms",
            "molecular analysis",
            r#"Let me detail the sophisticated mechanisms ensuring genetic fidelity.

**Concept**: DNA Replication Fidelity Mechanisms
**Subject Area**: Molecular Biology - Genetics
**Complexity**: Advanced

**Molecular Process:**
1. **Helicase Action**: Unwinds double helix creating replication fork
2. **Primer Synthesis**: RNA primers provide 3'-OH starting points
3. **Polymerase Function**: DNA polymerase III adds complementary nucleotides
4. **Proofreading**: 3' to 5' exonuclease activity removes mismatched bases
5. **Mismatch Repair**: Post-replication systems catch remaining errors

**Accuracy Mechanisms**: 
- Initial accuracy: 99.9%
- Proofreading: 99.99%
- Mismatch repair: 99.999%

**Biological Significance**: <1 in 10 billion error rate preserves genetic information
**Clinical Relevance**: Defects in these systems can cause cancer"#,
        ),
    ]
}

fn literature_examples() -> Vec<Example> {
    vec![
        example(
            "lit_symbolism_standard",
            Difficulty::Basic,
            "11th Grade",
            "What does the green light symbolize in The Great Gatsby?",
            "Symbolism",
            "symbol analysis",
            r#"Let's explore this powerful symbol together!

**Literary Element**: Symbolism
**Work**: The Great Gatsby by F. Scott Fitzgerald
**Analysis Level**: Standard

**Symbol Analysis:**
1. **Literal Level**: Green light at end of Daisy's dock
2. **Personal Meaning**: Gatsby's hope and longing for Daisy
3. **Thematic Significance**: The elusive American Dream
4. **Universal Theme**: Pursuit of unattainable desires

**Textual Evidence**: "Gatsby believed in the orgastic future that year by year recedes before us"
**Literary Technique**: Recurring motif throughout the novel
**Essay Applications**: Perfect for themes of hope, love, or American Dream analysis"#,
        ),
        example(
            "lit_character_intermediate",
            Difficulty::Intermediate,
            "9th Grade",
            "How does Scout Finch change throughout To Kill a Mockingbird?",
            "Character Development (Bildungsroman)",
            "character arc analysis",
            r#"I'll trace Scout's character arc through the novel's key events.

**Literary Element**: Character Development (Bildungsroman)
**Work**: To Kill a Mockingbird by Harper Lee
**Analysis Level**: Character Study

**Character Evolution:**
1. **Beginning**: Innocent, naive child with limited worldview
2. **Catalyst Events**: Tom Robinson trial, Boo Radley encounters
3. **Growing Awareness**: Recognizes social injustice and prejudice
4. **Moral Development**: Learns empathy and understanding
5. **Final Understanding**: "You never really understand a person until you walk in their shoes"

**Key Scenes**: Mrs. Dubose encounter, courthouse experience, Halloween night
**Literary Technique**: First-person retrospective narration
**Thematic Connection**: Loss of innocence and moral education"#,
        ),
        example(
            "lit_narrative_advanced",
            Difficulty::Advanced,
            "12th Grade",
            "Analyze the narrative structure and its effect in Beloved",
            "Narrative Structure and Temporal Manipulation",
            "structural analysis",
            r#"Let me examine Morrison's sophisticated narrative techniques and their psychological impact.

**Literary Element**: Narrative Structure and Temporal Manipulation
**Work**: Beloved by Toni Morrison
**Analysis Level**: Advanced

**Structural Analysis:**
1. **Non-linear Timeline**: Past and present interweave through memory
2. **Fragmented Narration**: Mirrors trauma's effect on memory and identity
3. **Multiple Perspectives**: Sethe, Denver, Paul D, and Beloved's voices
4. **Stream of Consciousness**: Interior psychological landscapes
5. **Cyclical Patterns**: Repetition reflects unresolved trauma

**Narrative Techniques**:
- **Analepsis**: Flashbacks reveal suppressed memories gradually
- **Focalization**: Shifting viewpoints create empathy and understanding
- **Symbolic Time**: Past intrudes on present through supernatural elements

**Psychological Effect**: Reader experiences trauma's disorienting impact
**Postmodern Elements**: Questions reliability of memory and narrative truth"#,
        ),
    ]
}
