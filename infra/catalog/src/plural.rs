//! Evaluation of the gettext `Plural-Forms` header.
//!
//! The header has the shape `nplurals=N; plural=EXPR;` where `EXPR` is a C
//! expression over the unsigned item count `n`. The grammar accepted here is
//! the one GNU gettext accepts: integer literals, `n`, parentheses, `!`, the
//! arithmetic operators `* / % + -`, comparisons, `&&`, `||` and `?:`.

use crate::error::CatalogError;
use std::borrow::Cow;

const MAX_DEPTH: usize = 64;

/// A parsed `Plural-Forms` rule.
///
/// ```rust
/// use locus_catalog::PluralRule;
///
/// let polish = PluralRule::parse(
///     "nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);",
/// )
/// .unwrap();
///
/// assert_eq!(polish.nplurals(), 3);
/// assert_eq!(polish.index(1), 0);
/// assert_eq!(polish.index(3), 1);
/// assert_eq!(polish.index(5), 2);
/// assert_eq!(polish.index(22), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    nplurals: usize,
    expr: Expr,
}

impl PluralRule {
    /// Parses a `Plural-Forms` header value.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidPluralForms`] if `nplurals` or `plural` is
    /// missing, `nplurals` is zero, or the expression does not parse.
    pub fn parse(header: &str) -> Result<Self, CatalogError> {
        let mut nplurals = None;
        let mut plural = None;

        for part in header.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            match key.trim() {
                "nplurals" => {
                    nplurals = Some(
                        value
                            .trim()
                            .parse::<usize>()
                            .ok()
                            .filter(|count| *count > 0)
                            .ok_or_else(|| invalid(format!("Bad nplurals '{}'", value.trim())))?,
                    );
                },
                "plural" => plural = Some(value),
                _ => {},
            }
        }

        let nplurals = nplurals.ok_or_else(|| invalid("Missing nplurals"))?;
        let plural = plural.ok_or_else(|| invalid("Missing plural expression"))?;

        let mut parser = Parser { src: plural, pos: 0, depth: 0 };
        let expr = parser.ternary()?;
        parser.skip_whitespace();
        if parser.pos != parser.src.len() {
            return Err(parser.error("Unexpected trailing input"));
        }

        Ok(Self { nplurals, expr })
    }

    #[must_use]
    pub const fn nplurals(&self) -> usize {
        self.nplurals
    }

    /// The form index for `n` items, capped at `nplurals - 1`.
    #[must_use]
    pub fn index(&self, n: u64) -> usize {
        let last = self.nplurals - 1;
        usize::try_from(self.expr.eval(n)).map_or(last, |index| index.min(last))
    }
}

fn invalid(message: impl Into<Cow<'static, str>>) -> CatalogError {
    CatalogError::InvalidPluralForms { message: message.into(), context: None }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expr {
    N,
    Literal(u64),
    Not(Box<Self>),
    Binary(BinaryOp, Box<Self>, Box<Self>),
    Ternary(Box<Self>, Box<Self>, Box<Self>),
}

impl Expr {
    fn eval(&self, n: u64) -> u64 {
        match self {
            Self::N => n,
            Self::Literal(value) => *value,
            Self::Not(inner) => u64::from(inner.eval(n) == 0),
            Self::Ternary(cond, then, otherwise) => {
                if cond.eval(n) == 0 { otherwise.eval(n) } else { then.eval(n) }
            },
            Self::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(n), rhs.eval(n));
                match op {
                    BinaryOp::Or => u64::from(a != 0 || b != 0),
                    BinaryOp::And => u64::from(a != 0 && b != 0),
                    BinaryOp::Eq => u64::from(a == b),
                    BinaryOp::Ne => u64::from(a != b),
                    BinaryOp::Lt => u64::from(a < b),
                    BinaryOp::Le => u64::from(a <= b),
                    BinaryOp::Gt => u64::from(a > b),
                    BinaryOp::Ge => u64::from(a >= b),
                    BinaryOp::Add => a.wrapping_add(b),
                    BinaryOp::Sub => a.wrapping_sub(b),
                    BinaryOp::Mul => a.wrapping_mul(b),
                    BinaryOp::Div => a.checked_div(b).unwrap_or(0),
                    BinaryOp::Rem => a.checked_rem(b).unwrap_or(0),
                }
            },
        }
    }
}

/// Recursive-descent parser, one method per C precedence level.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        self.pos += self.rest().bytes().take_while(u8::is_ascii_whitespace).count();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn error(&self, message: &str) -> CatalogError {
        invalid(format!("{message} at offset {} in '{}'", self.pos, self.src.trim()))
    }

    fn descend(&mut self) -> Result<(), CatalogError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error("Expression nested too deeply"));
        }
        Ok(())
    }

    fn ternary(&mut self) -> Result<Expr, CatalogError> {
        self.descend()?;
        let cond = self.or()?;
        let expr = if self.eat("?") {
            let then = self.ternary()?;
            if !self.eat(":") {
                return Err(self.error("Expected ':'"));
            }
            let otherwise = self.ternary()?;
            Expr::Ternary(Box::new(cond), Box::new(then), Box::new(otherwise))
        } else {
            cond
        };
        self.depth -= 1;
        Ok(expr)
    }

    /// Parses a left-associative chain of `ops` over operands parsed by `next`.
    ///
    /// Longer tokens must precede their prefixes in `ops` (`<=` before `<`).
    fn chain(
        &mut self,
        ops: &[(&str, BinaryOp)],
        next: fn(&mut Self) -> Result<Expr, CatalogError>,
    ) -> Result<Expr, CatalogError> {
        let mut lhs = next(self)?;
        'chain: loop {
            for (token, op) in ops {
                if self.eat(token) {
                    let rhs = next(self)?;
                    lhs = Expr::Binary(*op, Box::new(lhs), Box::new(rhs));
                    continue 'chain;
                }
            }
            return Ok(lhs);
        }
    }

    fn or(&mut self) -> Result<Expr, CatalogError> {
        self.chain(&[("||", BinaryOp::Or)], Self::and)
    }

    fn and(&mut self) -> Result<Expr, CatalogError> {
        self.chain(&[("&&", BinaryOp::And)], Self::equality)
    }

    fn equality(&mut self) -> Result<Expr, CatalogError> {
        self.chain(&[("==", BinaryOp::Eq), ("!=", BinaryOp::Ne)], Self::relational)
    }

    fn relational(&mut self) -> Result<Expr, CatalogError> {
        self.chain(
            &[("<=", BinaryOp::Le), (">=", BinaryOp::Ge), ("<", BinaryOp::Lt), (">", BinaryOp::Gt)],
            Self::additive,
        )
    }

    fn additive(&mut self) -> Result<Expr, CatalogError> {
        self.chain(&[("+", BinaryOp::Add), ("-", BinaryOp::Sub)], Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Expr, CatalogError> {
        self.chain(
            &[("*", BinaryOp::Mul), ("/", BinaryOp::Div), ("%", BinaryOp::Rem)],
            Self::unary,
        )
    }

    fn unary(&mut self) -> Result<Expr, CatalogError> {
        if self.eat("!") {
            self.descend()?;
            let inner = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, CatalogError> {
        if self.eat("(") {
            let inner = self.ternary()?;
            if !self.eat(")") {
                return Err(self.error("Expected ')'"));
            }
            return Ok(inner);
        }
        if self.eat("n") {
            return Ok(Expr::N);
        }

        let digits = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        let literal = self.rest()[..digits]
            .parse()
            .map_err(|_| self.error("Expected 'n', a number or '('"))?;
        self.pos += digits;
        Ok(Expr::Literal(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLISH: &str =
        "nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);";

    #[test]
    fn germanic_rule() {
        let rule = PluralRule::parse("nplurals=2; plural=(n != 1);").unwrap();
        assert_eq!(rule.nplurals(), 2);
        assert_eq!([0, 1, 2, 11].map(|n| rule.index(n)), [1, 0, 1, 1]);
    }

    #[test]
    fn single_form_rule() {
        let rule = PluralRule::parse("nplurals=1; plural=0;").unwrap();
        assert_eq!([0, 1, 5].map(|n| rule.index(n)), [0, 0, 0]);
    }

    #[test]
    fn polish_rule() {
        let rule = PluralRule::parse(POLISH).unwrap();
        assert_eq!(
            [1, 2, 4, 5, 12, 21, 22, 25, 112, 122].map(|n| rule.index(n)),
            [0, 1, 1, 2, 2, 2, 1, 2, 2, 1]
        );
    }

    #[test]
    fn operator_precedence() {
        let rule = PluralRule::parse("nplurals=9; plural=1 + 2 * 3 - !n;").unwrap();
        assert_eq!(rule.index(0), 6);
        assert_eq!(rule.index(4), 7);
    }

    #[test]
    fn out_of_range_index_is_capped() {
        let rule = PluralRule::parse("nplurals=2; plural=n;").unwrap();
        assert_eq!(rule.index(7), 1);
    }

    #[test]
    fn division_by_zero_selects_form_zero() {
        let rule = PluralRule::parse("nplurals=2; plural=n % 0;").unwrap();
        assert_eq!(rule.index(3), 0);
    }

    #[test]
    fn malformed_rules_are_rejected() {
        for header in [
            "plural=(n != 1);",
            "nplurals=2;",
            "nplurals=0; plural=0;",
            "nplurals=x; plural=0;",
            "nplurals=2; plural=(n != 1;",
            "nplurals=2; plural=n ? 1;",
            "nplurals=2; plural=n n;",
            "nplurals=2; plural=;",
        ] {
            let err = PluralRule::parse(header).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidPluralForms { .. }), "{header}: {err}");
        }
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let header = format!("nplurals=2; plural={}n{};", "(".repeat(100), ")".repeat(100));
        assert!(PluralRule::parse(&header).is_err());
    }
}
