//! Help text

use crate::parser::flags::{
    FLAG_OF_AMOUNT, FLAG_OF_CARD_BALANCE, FLAG_OF_CARD_LIMIT, FLAG_OF_CARD_NAME, FLAG_OF_CASHBACK,
    FLAG_OF_CATEGORY, FLAG_OF_CREDIT_CARD, FLAG_OF_DESCRIPTION, FLAG_OF_EXPENDITURE,
    FLAG_OF_EXPENDITURE_PER_MONTH, FLAG_OF_INCOME, FLAG_OF_PAYMENT_METHOD, FLAG_OF_TIME,
};

/// Command reference printed by `help`
pub fn help_text() -> String {
    let mut out = String::from("Here are the commands you can use:\n\n");

    out.push_str(&format!(
        "  add [{e}] {pm} <cash|card name> {c} <category> {d} <description> {a} <amount> {t} <date>\n",
        e = FLAG_OF_EXPENDITURE,
        pm = FLAG_OF_PAYMENT_METHOD,
        c = FLAG_OF_CATEGORY,
        d = FLAG_OF_DESCRIPTION,
        a = FLAG_OF_AMOUNT,
        t = FLAG_OF_TIME,
    ));
    out.push_str(&format!(
        "  add {cc} {n} <name> {cb} <cashback %> {cl} <limit> {bal} <balance>\n",
        cc = FLAG_OF_CREDIT_CARD,
        n = FLAG_OF_CARD_NAME,
        cb = FLAG_OF_CASHBACK,
        cl = FLAG_OF_CARD_LIMIT,
        bal = FLAG_OF_CARD_BALANCE,
    ));
    out.push_str(&format!(
        "  add {i} {a} <amount> {c} <income category>\n",
        i = FLAG_OF_INCOME,
        a = FLAG_OF_AMOUNT,
        c = FLAG_OF_CATEGORY,
    ));
    out.push_str(&format!(
        "  update {e}|{cc}|{i} <index> <same fields as add; {bal} is optional for cards>\n",
        e = FLAG_OF_EXPENDITURE,
        cc = FLAG_OF_CREDIT_CARD,
        i = FLAG_OF_INCOME,
        bal = FLAG_OF_CARD_BALANCE,
    ));
    out.push_str(&format!(
        "  delete {e}|{cc}|{i} <index>\n",
        e = FLAG_OF_EXPENDITURE,
        cc = FLAG_OF_CREDIT_CARD,
        i = FLAG_OF_INCOME,
    ));
    out.push_str(&format!(
        "  list [{e}|{cc}|{i}]\n",
        e = FLAG_OF_EXPENDITURE,
        cc = FLAG_OF_CREDIT_CARD,
        i = FLAG_OF_INCOME,
    ));
    out.push_str(&format!(
        "  calculate {epm} <date>\n",
        epm = FLAG_OF_EXPENDITURE_PER_MONTH
    ));
    out.push_str("  help\n  bye\n\n");

    out.push_str("Dates: dd/mm/yyyy, mm/yyyy or yyyy\n");
    out.push_str("Categories: Food, Transport, Utilities, Personal, Entertainment, Others\n");
    out.push_str("Income categories: Salary, Allowance, Investments, Others\n");
    out
}
