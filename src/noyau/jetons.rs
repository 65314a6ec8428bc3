// src/noyau/jetons.rs
//
// Jetons de touches
// -----------------
// La couche de présentation n’envoie que des jetons discrets.
// Deux orthographes acceptées :
// - noms ASCII (insensibles à la casse) : "enter", "chs", "x^y", "sqrt", "swap", "rdn", "pi"…
// - libellés du clavier : "ENTER↑", "√x", "x↔y" (ou "x⮂y"), "R↓", "×", "÷", "−", "π", "eˣ"…

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurNoyau;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Enter,
    Chs,
    Eex,

    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,

    Racine,
    Inverse,
    Log,
    Ln,
    Exp,

    Sin,
    Cos,
    Tan,
    Arc,

    EchangeXY,
    RoulerBas,
    Sto,
    Rcl,
    Clx,
    Clr,
    Pi,
}

impl Touche {
    /// Toutes les touches (hors chiffres), pour les tests et le clavier.
    pub const FONCTIONS: [Touche; 25] = [
        Touche::Point,
        Touche::Enter,
        Touche::Chs,
        Touche::Eex,
        Touche::Plus,
        Touche::Moins,
        Touche::Fois,
        Touche::Divise,
        Touche::Puissance,
        Touche::Racine,
        Touche::Inverse,
        Touche::Log,
        Touche::Ln,
        Touche::Exp,
        Touche::Sin,
        Touche::Cos,
        Touche::Tan,
        Touche::Arc,
        Touche::EchangeXY,
        Touche::RoulerBas,
        Touche::Sto,
        Touche::Rcl,
        Touche::Clx,
        Touche::Clr,
        Touche::Pi,
    ];

    /// Libellé gravé sur la touche.
    pub fn libelle(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Touche::Chiffre(d) => CHIFFRES.get(d as usize).copied().unwrap_or("?"),
            Touche::Point => ".",
            Touche::Enter => "ENTER↑",
            Touche::Chs => "CHS",
            Touche::Eex => "EEX",
            Touche::Plus => "+",
            Touche::Moins => "−",
            Touche::Fois => "×",
            Touche::Divise => "÷",
            Touche::Puissance => "x^y",
            Touche::Racine => "√x",
            Touche::Inverse => "1/x",
            Touche::Log => "log",
            Touche::Ln => "ln",
            Touche::Exp => "e^x",
            Touche::Sin => "sin",
            Touche::Cos => "cos",
            Touche::Tan => "tan",
            Touche::Arc => "arc",
            Touche::EchangeXY => "x↔y",
            Touche::RoulerBas => "R↓",
            Touche::Sto => "STO",
            Touche::Rcl => "RCL",
            Touche::Clx => "CLx",
            Touche::Clr => "CLR",
            Touche::Pi => "π",
        }
    }

    /// Touches de saisie littérale (ne valident rien).
    pub fn est_saisie(self) -> bool {
        matches!(self, Touche::Chiffre(_) | Touche::Point | Touche::Chs | Touche::Eex)
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

impl FromStr for Touche {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let brut = s.trim();

        // chiffre seul
        let mut chars = brut.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Ok(Touche::Chiffre(d as u8));
            }
        }

        // libellés du clavier (non ASCII) d’abord, puis noms ASCII
        let t = match brut {
            "−" | "–" => Touche::Moins,
            "×" | "·" => Touche::Fois,
            "÷" => Touche::Divise,
            "√x" | "√" => Touche::Racine,
            "eˣ" => Touche::Exp,
            "xʸ" => Touche::Puissance,
            "x⮂y" | "x↔y" | "x⇄y" => Touche::EchangeXY,
            "R↓" | "R🠟" => Touche::RoulerBas,
            "ENTER↑" | "ENTER ↑" | "ENTER🠩" => Touche::Enter,
            "π" => Touche::Pi,
            _ => match brut.to_ascii_lowercase().as_str() {
                "." | "," => Touche::Point,
                "enter" => Touche::Enter,
                "chs" => Touche::Chs,
                "eex" => Touche::Eex,
                "+" => Touche::Plus,
                "-" => Touche::Moins,
                "*" | "x" => Touche::Fois,
                "/" => Touche::Divise,
                "x^y" | "pow" => Touche::Puissance,
                "sqrt" => Touche::Racine,
                "1/x" | "inv" => Touche::Inverse,
                "log" => Touche::Log,
                "ln" => Touche::Ln,
                "e^x" | "exp" => Touche::Exp,
                "sin" => Touche::Sin,
                "cos" => Touche::Cos,
                "tan" => Touche::Tan,
                "arc" => Touche::Arc,
                "swap" | "x<>y" => Touche::EchangeXY,
                "rdn" | "roll" => Touche::RoulerBas,
                "sto" => Touche::Sto,
                "rcl" => Touche::Rcl,
                "clx" => Touche::Clx,
                "clr" => Touche::Clr,
                "pi" => Touche::Pi,
                _ => return Err(ErreurNoyau::touche_inconnue(brut)),
            },
        };
        Ok(t)
    }
}
