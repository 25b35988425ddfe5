/*!
# Error Messages

Errors in a stored line stop the program. A `Syntax error` there is
reported with the line listed and the failing position shown as `^`.

| Message | Meaning |
|---|---|
| `Syntax error` | The statement or expression could not be understood. |
| `How?` | The statement made sense but cannot be done here, like `RETURN` without `GOSUB` or `NEXT` for the wrong loop. |
| `Sorry!` | Out of memory, a line longer than 251 characters, too many nested loops, or an unknown sound. |
| `Stack is stuffed!` | The loop and subroutine stack no longer makes sense. |
| `ERROR: File Operation failed.` | A file could not be opened, read or written. |
| `Break` | CTRL-C stopped the program. |

`Syntax error` and `How?` leave you at the prompt. The others print `Ok`.

*/
