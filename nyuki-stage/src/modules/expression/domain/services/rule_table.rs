use regex::bytes::{Regex, RegexBuilder};
use std::sync::OnceLock;

use super::super::value_objects::Expression;

/// 表情规则数据
///
/// 顺序即优先级：特殊表情在前，标准表情按固定顺序排列，以 remorse 结尾。
/// `Neutral` 没有规则，只在全部规则未命中时返回。
const EXPRESSION_RULES: &[(Expression, &[&str])] = &[
    (
        Expression::Tsundere,
        &[r"\btsundere\b", r"\bb-baka\b", r"\bit's not like\b", r"\bhmph\b"],
    ),
    (
        Expression::Yandere,
        &[r"\byandere\b", r"\bonly mine\b", r"\bkill.*for you\b"],
    ),
    (
        Expression::Flirty,
        &[r"\bflirt", r"\bseductive", r"\bwink", r"\bteasing"],
    ),
    (
        Expression::Arrogant,
        &[r"\barrogant", r"\bsuperior", r"\bbeneath me\b"],
    ),
    (Expression::Sexy, &[r"\bsexy\b", r"\bsensual", r"\blust"]),
    (Expression::Ahegao, &[r"\bahegao\b", r"\becstasy\b"]),
    (
        Expression::Joy,
        &[
            r"\*laughs?\*",
            r"\*giggles?\*",
            r"\*chuckles?\*",
            r"\*smiles? (bright|wide|warm)",
            r"\bhaha\b",
            r"\bhehe\b",
            r"\*beams?\*",
        ],
    ),
    (
        Expression::Amusement,
        &[
            r"\*smirks?\*",
            r"\*grins?\*",
            r"\bamused\b",
            r"\*snickers?\*",
            r"\bfunny\b",
        ],
    ),
    (
        Expression::Anger,
        &[
            r"\*glares?\*",
            r"\*scowls?\*",
            r"\*snarls?\*",
            r"\bangry\b",
            r"\bfurious\b",
            r"\brage\b",
            r"\*seethes?\*",
        ],
    ),
    (
        Expression::Annoyance,
        &[
            r"\*sighs?\*",
            r"\*rolls? (her |their )?eyes?\*",
            r"\bannoyed\b",
            r"\*huffs?\*",
            r"\birritat",
            r"\*clicks? (her |their )?tongue\*",
            r"\*tch\*",
        ],
    ),
    (
        Expression::Sadness,
        &[
            r"\*cries?\*",
            r"\*sobs?\*",
            r"\*tears?\*",
            r"\bsad\b",
            r"\*weeps?\*",
            r"\*sniffles?\*",
        ],
    ),
    (
        Expression::Grief,
        &[
            r"\bgrief\b",
            r"\bmourning\b",
            r"\bdevastated\b",
            r"\bheartbroken\b",
        ],
    ),
    (
        Expression::Fear,
        &[
            r"\*trembles?\*",
            r"\*shakes?\*",
            r"\bscared\b",
            r"\bafraid\b",
            r"\*shivers?\*",
            r"\bterrified\b",
        ],
    ),
    (
        Expression::Surprise,
        &[
            r"\*gasps?\*",
            r"\bsurprised?\b",
            r"\*eyes? widen",
            r"\bshocked\b",
            r"\*blinks?\*",
        ],
    ),
    (
        Expression::Confusion,
        &[
            r"\*tilts? (her |their )?head\*",
            r"\bconfused\b",
            r"\*furrows? (her |their )?brow",
            r"\bpuzzled\b",
            r"\*scratches? (her |their )?head\*",
        ],
    ),
    (
        Expression::Embarrassment,
        &[
            r"\*blushes?\*",
            r"\*flushes?\*",
            r"\bembarrassed\b",
            r"\*face (turns?|goes?) red\*",
            r"\bflustered\b",
        ],
    ),
    (
        Expression::Nervousness,
        &[
            r"\bnervous\b",
            r"\*fidgets?\*",
            r"\banxious\b",
            r"\*shifts? (her |their )?weight\*",
            r"\*bites? (her |their )?lip\*",
        ],
    ),
    (
        Expression::Love,
        &[
            r"\blove\b",
            r"\*gazes? (loving|tender|soft)",
            r"\badore\b",
            r"\baffection",
        ],
    ),
    (
        Expression::Desire,
        &[
            r"\bdesire\b",
            r"\bwant you\b",
            r"\bneed you\b",
            r"\byearning\b",
            r"\blonging\b",
        ],
    ),
    (
        Expression::Admiration,
        &[
            r"\badmir",
            r"\bimpressed\b",
            r"\*looks? (at .* )?with respect\*",
            r"\brespect\b",
        ],
    ),
    (
        Expression::Approval,
        &[
            r"\*nods?\*",
            r"\bapprove\b",
            r"\bagree\b",
            r"\*thumbs? up\*",
            r"\bnot bad\b",
        ],
    ),
    (
        Expression::Disapproval,
        &[
            r"\*shakes? (her |their )?head\*",
            r"\bdisapprove\b",
            r"\*frowns?\*",
            r"\bdisagree\b",
        ],
    ),
    (
        Expression::Disappointment,
        &[
            r"\bdisappoint",
            r"\*looks? down\*",
            r"\blet down\b",
            r"\*deflates?\*",
        ],
    ),
    (
        Expression::Disgust,
        &[
            r"\bdisgust",
            r"\*wrinkles? (her |their )?nose\*",
            r"\brevolt",
            r"\bgross\b",
            r"\*gags?\*",
        ],
    ),
    (
        Expression::Caring,
        &[
            r"\bcar(e|ing)\b",
            r"\*touches? .* gently\*",
            r"\bconcerned?\b",
            r"\bworried? about\b",
        ],
    ),
    (
        Expression::Curiosity,
        &[
            r"\bcurious\b",
            r"\*leans? (in|forward|closer)\*",
            r"\binterested\b",
            r"\bintrigued\b",
        ],
    ),
    (
        Expression::Excitement,
        &[
            r"\bexcited\b",
            r"\*bounces?\*",
            r"\beager\b",
            r"\bthrilled\b",
            r"\*perks? up\*",
        ],
    ),
    (
        Expression::Gratitude,
        &[r"\bthank", r"\bgrateful\b", r"\bappreciate\b"],
    ),
    (
        Expression::Optimism,
        &[
            r"\boptimist",
            r"\bhopeful\b",
            r"\bpositive\b",
            r"\bbright side\b",
        ],
    ),
    (
        Expression::Pride,
        &[
            r"\bproud\b",
            r"\bpride\b",
            r"\*puffs? (out )?(her |their )?chest\*",
            r"\*stands? tall\*",
        ],
    ),
    (
        Expression::Realization,
        &[
            r"\brealize\b",
            r"\*eyes? light up\*",
            r"\bof course\b",
            r"\*snaps? (her |their )?fingers?\*",
            r"\baha\b",
        ],
    ),
    (
        Expression::Relief,
        &[
            r"\brelief\b",
            r"\brelieved\b",
            r"\*exhales?\*",
            r"\bphew\b",
            r"\*relaxes?\*",
        ],
    ),
    (
        Expression::Remorse,
        &[
            r"\bsorry\b",
            r"\bremorse\b",
            r"\bregret\b",
            r"\bapologize\b",
            r"\bguilty\b",
        ],
    ),
];

/// 单条表情规则
///
/// 任意一条模式命中即选中该表情。
/// 模式按字节匹配且关闭 Unicode：`\b` 只把 ASCII 字母、数字和 `_` 视为单词字符，
/// 大小写折叠也只作用于 ASCII，紧挨中文的关键词同样能命中。
#[derive(Debug, Clone)]
pub struct RuleEntry {
    expression: Expression,
    patterns: Vec<Regex>,
}

impl RuleEntry {
    fn compile(expression: Expression, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| {
                RegexBuilder::new(source)
                    .unicode(false)
                    .case_insensitive(true)
                    .build()
                    .expect("valid expression pattern")
            })
            .collect();

        Self {
            expression,
            patterns,
        }
    }

    pub fn expression(&self) -> Expression {
        self.expression
    }

    /// 返回第一条命中的模式
    pub fn first_match(&self, text: &str) -> Option<&Regex> {
        self.patterns
            .iter()
            .find(|pattern| pattern.is_match(text.as_bytes()))
    }
}

/// 表情规则表
///
/// 进程级常量，构造后不可变
#[derive(Debug)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// 全局规则表（首次访问时编译）
    pub fn global() -> &'static RuleTable {
        static TABLE: OnceLock<RuleTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let table = RuleTable::compile(EXPRESSION_RULES);
            tracing::debug!(entries = table.entries.len(), "Expression rule table compiled");
            table
        })
    }

    fn compile(rules: &[(Expression, &[&str])]) -> Self {
        Self {
            entries: rules
                .iter()
                .map(|(expression, sources)| RuleEntry::compile(*expression, sources))
                .collect(),
        }
    }

    pub fn entry_for(&self, expression: Expression) -> Option<&RuleEntry> {
        self.entries.iter().find(|e| e.expression == expression)
    }

    /// 按评估顺序返回全部规则
    pub fn ordered_entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// 全部合法表情，用于校验显式标签
    pub fn all_labels(&self) -> &'static [Expression] {
        Expression::all()
    }
}
