//! Immutable conversion tables keyed by canonical command name.
//!
//! Keys omit the leading backslash; the scanner in this crate extracts the
//! command name and looks it up here. `sqrt` is deliberately absent from
//! [`COMMAND_TO_UNICODE`] — the root-rewriting step must see the command
//! intact to place the index and radicand.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical command → Unicode glyph (or glyph sequence).
pub static COMMAND_TO_UNICODE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Greek, lower case
        ("alpha", "α"),
        ("beta", "β"),
        ("gamma", "γ"),
        ("delta", "δ"),
        ("epsilon", "ε"),
        ("varepsilon", "ε"),
        ("zeta", "ζ"),
        ("eta", "η"),
        ("theta", "θ"),
        ("vartheta", "ϑ"),
        ("iota", "ι"),
        ("kappa", "κ"),
        ("lambda", "λ"),
        ("mu", "μ"),
        ("nu", "ν"),
        ("xi", "ξ"),
        ("pi", "π"),
        ("varpi", "ϖ"),
        ("rho", "ρ"),
        ("varrho", "ϱ"),
        ("sigma", "σ"),
        ("varsigma", "ς"),
        ("tau", "τ"),
        ("upsilon", "υ"),
        ("phi", "φ"),
        ("varphi", "ϕ"),
        ("chi", "χ"),
        ("psi", "ψ"),
        ("omega", "ω"),
        // Greek, upper case
        ("Gamma", "Γ"),
        ("Delta", "Δ"),
        ("Theta", "Θ"),
        ("Lambda", "Λ"),
        ("Xi", "Ξ"),
        ("Pi", "Π"),
        ("Sigma", "Σ"),
        ("Upsilon", "Υ"),
        ("Phi", "Φ"),
        ("Psi", "Ψ"),
        ("Omega", "Ω"),
        // Operators
        ("times", "×"),
        ("div", "÷"),
        ("cdot", "·"),
        ("pm", "±"),
        ("mp", "∓"),
        ("ast", "∗"),
        ("star", "⋆"),
        ("circ", "∘"),
        ("bullet", "•"),
        // Relations
        ("leq", "≤"),
        ("le", "≤"),
        ("geq", "≥"),
        ("ge", "≥"),
        ("neq", "≠"),
        ("ne", "≠"),
        ("approx", "≈"),
        ("equiv", "≡"),
        ("sim", "∼"),
        ("simeq", "≃"),
        ("cong", "≅"),
        ("propto", "∝"),
        ("ll", "≪"),
        ("gg", "≫"),
        // Arrows
        ("rightarrow", "→"),
        ("to", "→"),
        ("leftarrow", "←"),
        ("gets", "←"),
        ("leftrightarrow", "↔"),
        ("Rightarrow", "⇒"),
        ("Leftarrow", "⇐"),
        ("Leftrightarrow", "⇔"),
        ("uparrow", "↑"),
        ("downarrow", "↓"),
        ("updownarrow", "↕"),
        ("mapsto", "↦"),
        ("longrightarrow", "⟶"),
        ("longleftarrow", "⟵"),
        // Set theory
        ("in", "∈"),
        ("notin", "∉"),
        ("ni", "∋"),
        ("subset", "⊂"),
        ("supset", "⊃"),
        ("subseteq", "⊆"),
        ("supseteq", "⊇"),
        ("cup", "∪"),
        ("cap", "∩"),
        ("emptyset", "∅"),
        ("varnothing", "∅"),
        // Logic
        ("forall", "∀"),
        ("exists", "∃"),
        ("nexists", "∄"),
        ("neg", "¬"),
        ("land", "∧"),
        ("lor", "∨"),
        ("wedge", "∧"),
        ("vee", "∨"),
        // Miscellaneous symbols
        ("infty", "∞"),
        ("partial", "∂"),
        ("nabla", "∇"),
        ("sum", "∑"),
        ("prod", "∏"),
        ("int", "∫"),
        ("oint", "∮"),
        ("angle", "∠"),
        ("triangle", "△"),
        ("square", "□"),
        ("diamond", "◇"),
        ("perp", "⊥"),
        ("parallel", "∥"),
        ("therefore", "∴"),
        ("because", "∵"),
        ("prime", "′"),
        ("degree", "°"),
        // Dots
        ("ldots", "…"),
        ("cdots", "⋯"),
        ("vdots", "⋮"),
        ("ddots", "⋱"),
        // Escaped literals and spacing
        ("%", "%"),
        ("$", "$"),
        ("&", "&"),
        ("#", "#"),
        ("_", "_"),
        ("quad", "  "),
        ("qquad", "    "),
        (",", " "),
        (";", " "),
        ("!", ""),
    ])
});

/// Canonical command → Turkish spoken phrase.
pub static COMMAND_TO_SPEECH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Greek, lower case
        ("alpha", "alfa"),
        ("beta", "beta"),
        ("gamma", "gama"),
        ("delta", "delta"),
        ("epsilon", "epsilon"),
        ("zeta", "zeta"),
        ("eta", "eta"),
        ("theta", "teta"),
        ("iota", "iota"),
        ("kappa", "kapa"),
        ("lambda", "lambda"),
        ("mu", "mü"),
        ("nu", "nü"),
        ("xi", "ksi"),
        ("pi", "pi"),
        ("rho", "ro"),
        ("sigma", "sigma"),
        ("tau", "tau"),
        ("upsilon", "ipsilon"),
        ("phi", "fi"),
        ("chi", "ki"),
        ("psi", "psi"),
        ("omega", "omega"),
        // Greek, upper case
        ("Gamma", "büyük gama"),
        ("Delta", "büyük delta"),
        ("Theta", "büyük teta"),
        ("Lambda", "büyük lambda"),
        ("Xi", "büyük ksi"),
        ("Pi", "büyük pi"),
        ("Sigma", "büyük sigma"),
        ("Phi", "büyük fi"),
        ("Psi", "büyük psi"),
        ("Omega", "büyük omega"),
        // Operators
        ("times", "çarpı"),
        ("cdot", "çarpı"),
        ("div", "bölü"),
        ("pm", "artı eksi"),
        ("mp", "eksi artı"),
        // Relations
        ("leq", "küçük eşit"),
        ("le", "küçük eşit"),
        ("geq", "büyük eşit"),
        ("ge", "büyük eşit"),
        ("neq", "eşit değil"),
        ("ne", "eşit değil"),
        ("approx", "yaklaşık eşit"),
        ("equiv", "denk"),
        ("sim", "benzer"),
        // Arrows
        ("rightarrow", "sağ ok"),
        ("to", "ok"),
        ("leftarrow", "sol ok"),
        ("Rightarrow", "çift sağ ok"),
        ("Leftarrow", "çift sol ok"),
        ("leftrightarrow", "çift yönlü ok"),
        ("mapsto", "eşlenir"),
        // Set theory
        ("in", "elemanıdır"),
        ("notin", "elemanı değildir"),
        ("subset", "alt kümesidir"),
        ("supset", "üst kümesidir"),
        ("cup", "birleşim"),
        ("cap", "kesişim"),
        ("emptyset", "boş küme"),
        // Logic
        ("forall", "her"),
        ("exists", "vardır"),
        ("neg", "değil"),
        ("land", "ve"),
        ("lor", "veya"),
        // Miscellaneous
        ("infty", "sonsuz"),
        ("partial", "kısmi türev"),
        ("nabla", "nabla"),
        ("sum", "toplam"),
        ("prod", "çarpım"),
        ("int", "integral"),
        ("sqrt", "karekök"),
        ("angle", "açı"),
        ("triangle", "üçgen"),
        ("perp", "dik"),
        ("parallel", "paralel"),
        ("prime", "üssü"),
        ("degree", "derece"),
        // Trigonometry
        ("sin", "sinüs"),
        ("cos", "kosinüs"),
        ("tan", "tanjant"),
        ("cot", "kotanjant"),
        ("sec", "sekant"),
        ("csc", "kosekant"),
        ("arcsin", "ark sinüs"),
        ("arccos", "ark kosinüs"),
        ("arctan", "ark tanjant"),
        // Logarithms and limits
        ("log", "logaritma"),
        ("ln", "doğal logaritma"),
        ("exp", "üstel"),
        ("lim", "limit"),
    ])
});

/// Single characters that have a Unicode superscript glyph.
pub static SUPERSCRIPTS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('0', '⁰'),
        ('1', '¹'),
        ('2', '²'),
        ('3', '³'),
        ('4', '⁴'),
        ('5', '⁵'),
        ('6', '⁶'),
        ('7', '⁷'),
        ('8', '⁸'),
        ('9', '⁹'),
        ('+', '⁺'),
        ('-', '⁻'),
        ('=', '⁼'),
        ('(', '⁽'),
        (')', '⁾'),
        ('n', 'ⁿ'),
        ('i', 'ⁱ'),
        ('x', 'ˣ'),
        ('y', 'ʸ'),
    ])
});

/// Single characters that have a Unicode subscript glyph.
pub static SUBSCRIPTS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('0', '₀'),
        ('1', '₁'),
        ('2', '₂'),
        ('3', '₃'),
        ('4', '₄'),
        ('5', '₅'),
        ('6', '₆'),
        ('7', '₇'),
        ('8', '₈'),
        ('9', '₉'),
        ('+', '₊'),
        ('-', '₋'),
        ('=', '₌'),
        ('(', '₍'),
        (')', '₎'),
        ('a', 'ₐ'),
        ('e', 'ₑ'),
        ('o', 'ₒ'),
        ('x', 'ₓ'),
        ('i', 'ᵢ'),
        ('j', 'ⱼ'),
        ('n', 'ₙ'),
        ('m', 'ₘ'),
    ])
});

/// `numerator/denominator` pairs with a dedicated Unicode glyph.
pub static SIMPLE_FRACTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1/2", "½"),
        ("1/3", "⅓"),
        ("2/3", "⅔"),
        ("1/4", "¼"),
        ("3/4", "¾"),
        ("1/5", "⅕"),
        ("2/5", "⅖"),
        ("3/5", "⅗"),
        ("4/5", "⅘"),
        ("1/6", "⅙"),
        ("5/6", "⅚"),
        ("1/8", "⅛"),
        ("3/8", "⅜"),
        ("5/8", "⅝"),
        ("7/8", "⅞"),
    ])
});
