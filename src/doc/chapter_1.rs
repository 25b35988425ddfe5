/*!
# Expressions and Variables

There are 26 variables, `A` through `Z`. Each holds a 32-bit floating
point number and starts out as zero. Variables are never cleared, not
even by `RUN` or `NEW`.

```text
LET A = 3.14
B = A * 2
```

Number literals may have a fraction and an exponent.

```text
PRINT 1.5E3, .25, 2E-2
```

## Operators

From the loosest binding to the tightest:

 * One comparison: `=` `<>` `!=` `<` `<=` `>` `>=`. The result is 1 for
   true and 0 for false. Comparisons do not chain; `1<2<3` stops
   after `1<2`.
 * Addition and subtraction, with an optional leading sign.
 * Multiplication and division. Dividing by zero is a `Syntax error`.
 * Numbers, variables, function calls and parentheses.

## Characters

`CHR$(X)` gives a value that prints as the character with code X. In any
arithmetic it is the number X again.

```text
PRINT CHR$(72);CHR$(73)
HI
```

*/
