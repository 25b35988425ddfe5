/*!
# `PRINT [<item>[;|,]...]`

## Purpose
Prints expressions and quoted text. `?` is the same as `PRINT`.

## Remarks
Items are separated by `;` or `,` which print nothing between them. A
`;` at the end leaves the cursor on the same line. Text may be quoted
with `"` or `'`. `CHR$` values are sent as a single byte.

## Example
```text
PRINT "A=";5;" B=";6
A=5 B=6
```

*/
