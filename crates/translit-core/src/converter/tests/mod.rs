mod basic;
mod rules;
